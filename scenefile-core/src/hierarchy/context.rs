use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use scenefile_model::{Context, ContextIds, Node};
use tracing::{debug, info, warn};

use super::authority::NamingAuthority;
use super::layout::HierarchyLayout;
use super::tree::JobTree;
use crate::error::{HierarchyError, HierarchyResult};

/// The job/scene/shot a session is working in, plus a cache of the tree under
/// its job.
///
/// The triple only changes through [`HierarchyContext::set_context`] and
/// [`HierarchyContext::set_current_directory`], which either commit a
/// validated location or leave everything as it was. The cached tree always
/// belongs to the current job.
pub struct HierarchyContext {
    authority: Arc<dyn NamingAuthority>,
    layout: HierarchyLayout,
    context: Context,
    tree: Option<JobTree>,
}

impl HierarchyContext {
    /// An empty context with nothing selected.
    pub fn new(authority: Arc<dyn NamingAuthority>, layout: HierarchyLayout) -> Self {
        Self {
            authority,
            layout,
            context: Context::default(),
            tree: None,
        }
    }

    /// Resolve `ids` as deep as the authority allows. Levels that do not
    /// resolve to an existing location are left unset.
    pub fn from_ids(
        ids: &ContextIds,
        authority: Arc<dyn NamingAuthority>,
        layout: HierarchyLayout,
    ) -> Self {
        let mut hierarchy = Self::new(authority, layout);
        hierarchy.context = hierarchy.resolve_deepest(ids);
        hierarchy
    }

    /// Resolve the job/scene/shot prefix of a filesystem path.
    pub fn from_path(
        path: &str,
        authority: Arc<dyn NamingAuthority>,
        layout: HierarchyLayout,
    ) -> Self {
        let ids = layout.parse_path(path);
        debug!(path, candidates = %ids, "parsed hierarchy candidates from path");
        Self::from_ids(&ids, authority, layout)
    }

    /// Context of the invoking environment, as reported by the authority.
    pub fn from_environment(
        authority: Arc<dyn NamingAuthority>,
        layout: HierarchyLayout,
    ) -> HierarchyResult<Self> {
        let context = authority.from_environment()?;
        let mut hierarchy = Self::new(authority, layout);
        hierarchy.context = context;
        Ok(hierarchy)
    }

    fn resolve_deepest(&self, ids: &ContextIds) -> Context {
        for depth in (1..=ids.depth()).rev() {
            let candidate = ids.truncated(depth);
            match self.resolve_valid(&candidate) {
                Ok(context) => return context,
                Err(err) => debug!(
                    candidate = %candidate,
                    error = %err,
                    "falling back to a shallower context"
                ),
            }
        }
        Context::default()
    }

    fn resolve_valid(&self, ids: &ContextIds) -> HierarchyResult<Context> {
        let candidate = self.authority.resolve(ids)?;
        if self.authority.validate(&candidate)? {
            Ok(candidate)
        } else {
            Err(HierarchyError::ValidationFailed(ids.to_string()))
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn job(&self) -> Option<&Node> {
        self.context.job.as_ref()
    }

    pub fn scene(&self) -> Option<&Node> {
        self.context.scene.as_ref()
    }

    pub fn shot(&self) -> Option<&Node> {
        self.context.shot.as_ref()
    }

    pub fn layout(&self) -> &HierarchyLayout {
        &self.layout
    }

    /// Cached tree, if one has been loaded for the current job.
    pub fn tree(&self) -> Option<&JobTree> {
        self.tree.as_ref()
    }

    /// Ask the authority whether the current context exists.
    pub fn validate(&self) -> HierarchyResult<bool> {
        Ok(self.authority.validate(&self.context)?)
    }

    /// Rebuild the scene/shot tree for the current job.
    ///
    /// The new tree replaces the cache only once every lookup has succeeded;
    /// on error the previous cache is kept.
    pub fn refresh_tree(&mut self) -> HierarchyResult<&JobTree> {
        let job = self.context.job.as_ref().ok_or(HierarchyError::NoJob)?;
        let tree = self.load_tree(job)?;
        info!(job = tree.job(), scenes = tree.len(), "refreshed hierarchy tree");
        Ok(&*self.tree.insert(tree))
    }

    /// Load the tree unless one for the current job is already cached.
    pub fn ensure_tree(&mut self) -> HierarchyResult<&JobTree> {
        if self.cached_tree().is_err() {
            return self.refresh_tree();
        }
        self.cached_tree()
    }

    fn load_tree(&self, job: &Node) -> HierarchyResult<JobTree> {
        let mut tree = JobTree::new(job.name());
        for scene in self.authority.children(job)? {
            if self.layout.is_ignored_scene(scene.name()) {
                continue;
            }
            let shots = self
                .authority
                .children(&scene)?
                .into_iter()
                .map(|shot| shot.name().to_string())
                .filter(|shot| !self.layout.is_ignored_shot(shot))
                .collect();
            tree.insert_scene(scene.name().to_string(), shots);
        }
        Ok(tree)
    }

    fn cached_tree(&self) -> HierarchyResult<&JobTree> {
        let job = self.context.job_name().ok_or(HierarchyError::NoJob)?;
        self.tree
            .as_ref()
            .filter(|tree| tree.job() == job)
            .ok_or_else(|| HierarchyError::TreeNotLoaded(job.to_string()))
    }

    /// Scene names in the cached tree, minus the ignore list and `filter`.
    pub fn get_scenes(&self, filter: &[&str]) -> HierarchyResult<Vec<&str>> {
        let tree = self.cached_tree()?;
        Ok(tree
            .scene_names()
            .filter(|scene| !self.layout.is_ignored_scene(scene) && !filter.contains(scene))
            .collect())
    }

    /// Shot names under `scene`, minus the ignore list and `filter`.
    ///
    /// A scene that is not in the tree is [`HierarchyError::SceneNotFound`],
    /// never an empty list.
    pub fn get_shots(&self, scene: &str, filter: &[&str]) -> HierarchyResult<Vec<&str>> {
        let tree = self.cached_tree()?;
        let shots = tree
            .shots(scene)
            .ok_or_else(|| HierarchyError::SceneNotFound(scene.to_string()))?;
        Ok(shots
            .iter()
            .map(String::as_str)
            .filter(|shot| !self.layout.is_ignored_shot(shot) && !filter.contains(shot))
            .collect())
    }

    /// Move to a new location, keeping the current value of every level that
    /// is not supplied. Empty names count as not supplied.
    pub fn set_current_directory(
        &mut self,
        job: Option<&str>,
        scene: Option<&str>,
        shot: Option<&str>,
    ) -> HierarchyResult<()> {
        let current = self.context.ids();
        let supplied = |value: Option<&str>| {
            value
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let ids = ContextIds {
            job: supplied(job).or(current.job),
            scene: supplied(scene).or(current.scene),
            shot: supplied(shot).or(current.shot),
        };
        self.set_context(&ids)
    }

    /// Replace the whole triple. On any failure the current context and tree
    /// are left untouched.
    pub fn set_context(&mut self, ids: &ContextIds) -> HierarchyResult<()> {
        let candidate = match self.resolve_valid(ids) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(
                    requested = %ids,
                    current = %self.context,
                    error = %err,
                    "context change rejected"
                );
                return Err(err);
            }
        };

        if candidate.job_name() != self.context.job_name() {
            self.tree = None;
        }
        self.context = candidate;
        info!(context = %self.context, "context changed");
        Ok(())
    }

    /// Canonical `/{root}/{job}/{scene}/{shot}` path of the current context.
    ///
    /// # Panics
    ///
    /// Panics when any level is unset; see [`Self::try_build_path`].
    pub fn build_path(&self) -> String {
        match self.try_build_path() {
            Ok(path) => path,
            Err(err) => panic!("cannot build hierarchy path: {err}"),
        }
    }

    pub fn try_build_path(&self) -> HierarchyResult<String> {
        let job = self
            .context
            .job_name()
            .ok_or(HierarchyError::IncompleteContext("job"))?;
        let scene = self
            .context
            .scene_name()
            .ok_or(HierarchyError::IncompleteContext("scene"))?;
        let shot = self
            .context
            .shot_name()
            .ok_or(HierarchyError::IncompleteContext("shot"))?;
        Ok(self.layout.format_path(job, scene, shot))
    }
}

impl Debug for HierarchyContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyContext")
            .field("context", &self.context)
            .field("layout", &self.layout)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl Display for HierarchyContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.try_build_path() {
            Ok(path) => write!(f, "Current path is {path}"),
            Err(_) => write!(f, "Current context is {}", self.context),
        }
    }
}
