use indexmap::IndexMap;

/// Cached scene/shot listing for a single job, in authority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTree {
    job: String,
    scenes: IndexMap<String, Vec<String>>,
}

impl JobTree {
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            scenes: IndexMap::new(),
        }
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    /// Shots under `scene`, or `None` when the scene is not in the tree.
    pub fn shots(&self, scene: &str) -> Option<&[String]> {
        self.scenes.get(scene).map(Vec::as_slice)
    }

    pub fn contains_scene(&self, scene: &str) -> bool {
        self.scenes.contains_key(scene)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub(crate) fn insert_scene(&mut self, scene: String, shots: Vec<String>) {
        self.scenes.insert(scene, shots);
    }
}
