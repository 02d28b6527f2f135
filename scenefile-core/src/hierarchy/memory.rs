use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;
use parking_lot::RwLock;
use scenefile_model::{Context, ContextIds, HierarchyLevel, Node};

use super::authority::NamingAuthority;
use crate::error::AuthorityError;

type SceneMap = IndexMap<String, Vec<String>>;

/// Naming authority backed by an in-memory tree.
///
/// `resolve` only checks that names are well formed; existence is decided by
/// `validate`, matching how a remote authority separates the two. Nodes can
/// be marked unavailable so that `children` fails for them.
#[derive(Default)]
pub struct InMemoryAuthority {
    jobs: RwLock<IndexMap<String, SceneMap>>,
    unavailable: RwLock<HashSet<String>>,
    environment: ContextIds,
}

impl InMemoryAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert`].
    pub fn with_path(self, path: &str) -> Self {
        self.insert(path);
        self
    }

    /// Environment variables consulted by `from_environment` (`JOB`, `SCENE`,
    /// `SHOT`).
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let slot = match key.as_ref() {
                "JOB" => &mut self.environment.job,
                "SCENE" => &mut self.environment.scene,
                "SHOT" => &mut self.environment.shot,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        self
    }

    /// Create every level of a `job[/scene[/shot]]` path.
    pub fn insert(&self, path: &str) {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let Some(job) = segments.next() else {
            return;
        };
        let mut jobs = self.jobs.write();
        let scenes = jobs.entry(job.to_string()).or_default();
        let Some(scene) = segments.next() else {
            return;
        };
        let shots = scenes.entry(scene.to_string()).or_default();
        if let Some(shot) = segments.next()
            && !shots.iter().any(|existing| existing == shot)
        {
            shots.push(shot.to_string());
        }
    }

    /// Make `children` fail for the node at `path` (`job` or `job/scene`).
    pub fn set_unavailable(&self, path: &str, unavailable: bool) {
        let mut nodes = self.unavailable.write();
        if unavailable {
            nodes.insert(path.to_string());
        } else {
            nodes.remove(path);
        }
    }

    fn check_name(level: HierarchyLevel, name: &str) -> Result<(), AuthorityError> {
        if name.is_empty() || name.contains('/') {
            return Err(AuthorityError::NotFound(format!(
                "invalid {level} name {name:?}"
            )));
        }
        Ok(())
    }
}

impl NamingAuthority for InMemoryAuthority {
    fn resolve(&self, ids: &ContextIds) -> Result<Context, AuthorityError> {
        let mut context = Context::default();
        let Some(job) = ids.job.as_deref() else {
            if ids.is_empty() {
                return Ok(context);
            }
            return Err(AuthorityError::NotFound(format!("{ids} has no job")));
        };
        Self::check_name(HierarchyLevel::Job, job)?;
        let job = Node::job(job);

        if let Some(scene) = ids.scene.as_deref() {
            Self::check_name(HierarchyLevel::Scene, scene)?;
            let scene = job.child(scene);
            if let Some(shot) = ids.shot.as_deref() {
                Self::check_name(HierarchyLevel::Shot, shot)?;
                context.shot = scene.as_ref().and_then(|scene| scene.child(shot));
            }
            context.scene = scene;
        } else if ids.shot.is_some() {
            return Err(AuthorityError::NotFound(format!("{ids} has no scene")));
        }

        context.job = Some(job);
        Ok(context)
    }

    fn children(&self, node: &Node) -> Result<Vec<Node>, AuthorityError> {
        let key = node.path.join("/");
        if self.unavailable.read().contains(&key) {
            return Err(AuthorityError::Unavailable(format!("cannot list {key}")));
        }

        let jobs = self.jobs.read();
        let not_found = || AuthorityError::NotFound(key.clone());
        let names: Vec<String> = match node.path.as_slice() {
            [job] => jobs.get(job).ok_or_else(not_found)?.keys().cloned().collect(),
            [job, scene] => jobs
                .get(job)
                .and_then(|scenes| scenes.get(scene))
                .ok_or_else(not_found)?
                .clone(),
            [_, _, _] => Vec::new(),
            _ => return Err(not_found()),
        };
        Ok(names.into_iter().filter_map(|name| node.child(name)).collect())
    }

    fn validate(&self, context: &Context) -> Result<bool, AuthorityError> {
        let jobs = self.jobs.read();
        let Some(job) = context.job_name() else {
            return Ok(context.scene.is_none() && context.shot.is_none());
        };
        let Some(scenes) = jobs.get(job) else {
            return Ok(false);
        };
        let Some(scene) = context.scene_name() else {
            return Ok(context.shot.is_none());
        };
        let Some(shots) = scenes.get(scene) else {
            return Ok(false);
        };
        Ok(match context.shot_name() {
            Some(shot) => shots.iter().any(|existing| existing == shot),
            None => true,
        })
    }

    fn from_environment(&self) -> Result<Context, AuthorityError> {
        let context = self.resolve(&self.environment)?;
        if self.validate(&context)? {
            Ok(context)
        } else {
            Err(AuthorityError::NotFound(format!(
                "environment context {}",
                self.environment
            )))
        }
    }
}

impl Debug for InMemoryAuthority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryAuthority")
            .field("jobs", &self.jobs.read().len())
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
