use scenefile_model::ContextIds;
use serde::{Deserialize, Serialize};

/// Root segment every job lives under.
pub const DEFAULT_ROOT: &str = "jobs";

/// Administrative scene categories that never hold production shots.
pub const DEFAULT_SCENE_IGNORE: &[&str] = &[
    "pitch",
    "archive",
    "library",
    "pantry",
    "reference",
    "ripple",
    "stats",
    "templates",
    "contactSheets",
    "common",
    "docs",
];

/// Support folders that sit next to shots.
pub const DEFAULT_SHOT_IGNORE: &[&str] = &["nuke_template", "config", "tools"];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Shape of the on-disk hierarchy: where it is rooted and which children are
/// skipped when the tree is enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyLayout {
    pub root: String,
    pub scene_ignore: Vec<String>,
    pub shot_ignore: Vec<String>,
}

impl Default for HierarchyLayout {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            scene_ignore: owned(DEFAULT_SCENE_IGNORE),
            shot_ignore: owned(DEFAULT_SHOT_IGNORE),
        }
    }
}

impl HierarchyLayout {
    fn root_segment(&self) -> &str {
        self.root.trim_matches('/')
    }

    /// Job/scene/shot candidates from the leading segments of `path`.
    ///
    /// Empty segments and the root segment are skipped; anything after the
    /// third remaining segment is ignored.
    pub fn parse_path(&self, path: &str) -> ContextIds {
        let root = self.root_segment();
        let mut segments = path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != root)
            .map(str::to_string);
        ContextIds {
            job: segments.next(),
            scene: segments.next(),
            shot: segments.next(),
        }
    }

    /// `/{root}/{job}/{scene}/{shot}`
    pub fn format_path(&self, job: &str, scene: &str, shot: &str) -> String {
        format!("/{}/{job}/{scene}/{shot}", self.root_segment())
    }

    pub fn is_ignored_scene(&self, name: &str) -> bool {
        self.scene_ignore.iter().any(|ignored| ignored == name)
    }

    pub fn is_ignored_shot(&self, name: &str) -> bool {
        self.shot_ignore.iter().any(|ignored| ignored == name)
    }
}
