use scenefile_config::{CONFIG_PATH_VAR, ConfigSource, SceneFileConfig};
use scenefile_core::{Discipline, FilenameDescriptor, HierarchyLayout};
use std::fs;
use tempfile::TempDir;

#[test]
fn toml_file_overrides_template_and_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenefile.toml");
    fs::write(
        &path,
        r#"
[naming]
template = "{DESCRIPTION}-{DISCIPLINE}-v{VERSION}-{INITIALS}-{OPTIONAL}.{EXT}"

[hierarchy]
root = "projects"
shot_ignore = ["tools"]
"#,
    )
    .unwrap();

    let config = SceneFileConfig::load_from_file(&path).unwrap();
    let descriptor = FilenameDescriptor::new("balloon", Discipline::Fx, 3, "aw");

    assert_eq!(
        descriptor.render_with(&config.naming.template),
        "balloon-FX-v003-aw.ma"
    );
    assert_eq!(config.hierarchy.root, "projects");
    assert_eq!(config.hierarchy.shot_ignore, vec!["tools".to_string()]);
    assert_eq!(
        config.hierarchy.scene_ignore,
        HierarchyLayout::default().scene_ignore
    );
    assert_eq!(
        config.hierarchy.format_path("santa", "build", "sh010"),
        "/projects/santa/build/sh010"
    );
}

#[test]
fn json_file_and_env_path_lookup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"naming": {"initials": "jd"}}"#).unwrap();
    let path_str = path.display().to_string();

    let (config, source) = SceneFileConfig::load_with(|key| {
        (key == CONFIG_PATH_VAR).then(|| path_str.clone())
    })
    .unwrap();

    assert_eq!(source, ConfigSource::EnvPath(path.clone()));
    assert_eq!(config.naming.initials.as_deref(), Some("jd"));
    assert_eq!(config.hierarchy, HierarchyLayout::default());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = SceneFileConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "{err}");
}

#[test]
fn unknown_extension_falls_back_to_either_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenefile.conf");
    fs::write(&path, "[hierarchy]\nroot = \"mnt\"\n").unwrap();
    assert_eq!(
        SceneFileConfig::load_from_file(&path).unwrap().hierarchy.root,
        "mnt"
    );

    fs::write(&path, "not = [valid").unwrap();
    assert!(SceneFileConfig::load_from_file(&path).is_err());
}
