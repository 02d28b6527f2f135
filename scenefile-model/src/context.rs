use std::fmt::{self, Display, Formatter};

/// Depth of a node in the job/scene/shot hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HierarchyLevel {
    Job,
    Scene,
    Shot,
}

impl HierarchyLevel {
    /// Level of the children of a node at this level, if any.
    pub const fn child(self) -> Option<Self> {
        match self {
            HierarchyLevel::Job => Some(HierarchyLevel::Scene),
            HierarchyLevel::Scene => Some(HierarchyLevel::Shot),
            HierarchyLevel::Shot => None,
        }
    }
}

impl Display for HierarchyLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyLevel::Job => write!(f, "job"),
            HierarchyLevel::Scene => write!(f, "scene"),
            HierarchyLevel::Shot => write!(f, "shot"),
        }
    }
}

/// A hierarchy node as resolved by a naming authority.
///
/// `path` holds the names of every ancestor followed by the node's own name,
/// so a shot node carries `[job, scene, shot]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub level: HierarchyLevel,
    pub path: Vec<String>,
}

impl Node {
    pub fn job(name: impl Into<String>) -> Self {
        Self {
            level: HierarchyLevel::Job,
            path: vec![name.into()],
        }
    }

    /// Child node one level below `self`, or `None` below a shot.
    pub fn child(&self, name: impl Into<String>) -> Option<Self> {
        let level = self.level.child()?;
        let mut path = self.path.clone();
        path.push(name.into());
        Some(Self { level, path })
    }

    /// Canonical name of this node.
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join("/"))
    }
}

/// Identifier triple requested from a naming authority. Any field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextIds {
    pub job: Option<String>,
    pub scene: Option<String>,
    pub shot: Option<String>,
}

impl ContextIds {
    pub fn new(
        job: Option<impl Into<String>>,
        scene: Option<impl Into<String>>,
        shot: Option<impl Into<String>>,
    ) -> Self {
        Self {
            job: job.map(Into::into),
            scene: scene.map(Into::into),
            shot: shot.map(Into::into),
        }
    }

    /// Keep only the first `depth` levels.
    pub fn truncated(&self, depth: usize) -> Self {
        Self {
            job: self.job.clone().filter(|_| depth >= 1),
            scene: self.scene.clone().filter(|_| depth >= 2),
            shot: self.shot.clone().filter(|_| depth >= 3),
        }
    }

    /// Number of leading levels that are set without a gap.
    pub fn depth(&self) -> usize {
        match (&self.job, &self.scene, &self.shot) {
            (Some(_), Some(_), Some(_)) => 3,
            (Some(_), Some(_), None) => 2,
            (Some(_), None, _) => 1,
            (None, _, _) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job.is_none() && self.scene.is_none() && self.shot.is_none()
    }
}

impl Display for ContextIds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.job.as_deref().unwrap_or("-"),
            self.scene.as_deref().unwrap_or("-"),
            self.shot.as_deref().unwrap_or("-"),
        )
    }
}

/// A resolved location in the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    pub job: Option<Node>,
    pub scene: Option<Node>,
    pub shot: Option<Node>,
}

impl Context {
    /// Names of the resolved nodes, suitable for re-resolution.
    pub fn ids(&self) -> ContextIds {
        ContextIds {
            job: self.job.as_ref().map(|node| node.name().to_string()),
            scene: self.scene.as_ref().map(|node| node.name().to_string()),
            shot: self.shot.as_ref().map(|node| node.name().to_string()),
        }
    }

    pub fn job_name(&self) -> Option<&str> {
        self.job.as_ref().map(Node::name)
    }

    pub fn scene_name(&self) -> Option<&str> {
        self.scene.as_ref().map(Node::name)
    }

    pub fn shot_name(&self) -> Option<&str> {
        self.shot.as_ref().map(Node::name)
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job={} scene={} shot={}",
            self.job_name().unwrap_or("-"),
            self.scene_name().unwrap_or("-"),
            self.shot_name().unwrap_or("-"),
        )
    }
}
