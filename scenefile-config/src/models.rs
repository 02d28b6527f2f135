use anyhow::{Context, anyhow};
use scenefile_core::{FilenameTemplate, HierarchyLayout};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "SCENEFILE_CONFIG_PATH";
/// Environment variable holding inline JSON config.
pub const CONFIG_JSON_VAR: &str = "SCENEFILE_CONFIG_JSON";

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// How filenames are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Filename template. Must contain `{DESCRIPTION}`, `{DISCIPLINE}`,
    /// `{VERSION}`, `{INITIALS}` and `{EXT}`; `{OPTIONAL}` is dropped along
    /// with its leading separator when a file has no optional tag.
    pub template: FilenameTemplate,
    /// Initials stamped on new versions when the command line does not give
    /// any. Existing initials are kept when unset.
    pub initials: Option<String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneFileConfig {
    pub naming: NamingSettings,
    /// Hierarchy root and the scene/shot names skipped when listing a job.
    pub hierarchy: HierarchyLayout,
}

impl SceneFileConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$SCENEFILE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SCENEFILE_CONFIG_JSON` (inline JSON),
    /// 3) a `scenefile.toml`/`scenefile.json` in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// [`Self::load_from_env`] with an injectable variable lookup.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read scenefile config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid scenefile config {}", path.display())),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid scenefile config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse scenefile config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid scenefile config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "scenefile.toml",
            "scenefile.json",
            "config/scenefile.toml",
            "config/scenefile.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_str_accepts_toml_and_json() {
        let toml = r#"
            [naming]
            initials = "aw"

            [hierarchy]
            root = "shows"
        "#;
        let config = SceneFileConfig::parse_from_str(toml, "inline").unwrap();
        assert_eq!(config.naming.initials.as_deref(), Some("aw"));
        assert_eq!(config.hierarchy.root, "shows");
        assert_eq!(config.hierarchy.shot_ignore, HierarchyLayout::default().shot_ignore);

        let json = r#"{"hierarchy": {"scene_ignore": ["pitch"]}}"#;
        let config = SceneFileConfig::parse_from_str(json, "inline").unwrap();
        assert_eq!(config.hierarchy.scene_ignore, vec!["pitch".to_string()]);
        assert_eq!(config.naming, NamingSettings::default());
    }

    #[test]
    fn invalid_template_is_rejected() {
        let err = SceneFileConfig::parse_json(r#"{"naming": {"template": "{DESCRIPTION}.{EXT}"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("DISCIPLINE"), "{err}");
    }

    #[test]
    fn inline_json_from_lookup() {
        let (config, source) = SceneFileConfig::load_with(|key| match key {
            CONFIG_JSON_VAR => Some(r#"{"naming": {"initials": "jd"}}"#.to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(source, ConfigSource::EnvInline);
        assert_eq!(config.naming.initials.as_deref(), Some("jd"));
    }
}
