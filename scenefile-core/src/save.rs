//! Composition of the filename and hierarchy models for a single save.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{NamingResult, SaveError};
use crate::hierarchy::{HierarchyContext, HierarchyLayout, NamingAuthority};
use crate::naming::{FilenameDescriptor, FilenameTemplate};

/// Folder all discipline folders live under, relative to a shot.
pub const SCENES_FOLDER: &str = "maya/scenes";

/// State for saving the next version of one scene file.
///
/// Built from the path of the file currently open; an empty path means a new,
/// never-saved file.
#[derive(Debug)]
pub struct SaveSession {
    input_path: String,
    hierarchy: HierarchyContext,
    descriptor: FilenameDescriptor,
    template: FilenameTemplate,
}

impl SaveSession {
    pub fn open(
        input_path: &str,
        authority: Arc<dyn NamingAuthority>,
        layout: HierarchyLayout,
        template: FilenameTemplate,
    ) -> Self {
        let hierarchy = HierarchyContext::from_path(input_path, authority, layout);
        let descriptor = match Path::new(input_path).file_name().and_then(|name| name.to_str()) {
            Some(filename) => FilenameDescriptor::from_existing(filename),
            None => FilenameDescriptor::default(),
        };
        info!(
            input = input_path,
            context = %hierarchy.context(),
            descriptor = %descriptor,
            "opened save session"
        );
        Self {
            input_path: input_path.to_string(),
            hierarchy,
            descriptor,
            template,
        }
    }

    /// Author initials for files that do not already carry any, usually
    /// [`initials_from_username`](crate::naming::initials_from_username) of
    /// the invoking user.
    pub fn with_initials(mut self, initials: &str) -> Self {
        self.descriptor.fill_initials(initials);
        self
    }

    pub fn is_new_file(&self) -> bool {
        self.input_path.is_empty()
    }

    /// Directory of the input file.
    pub fn input_folder(&self) -> &str {
        Path::new(&self.input_path)
            .parent()
            .and_then(|parent| parent.to_str())
            .unwrap_or_default()
    }

    pub fn hierarchy(&self) -> &HierarchyContext {
        &self.hierarchy
    }

    pub fn descriptor(&self) -> &FilenameDescriptor {
        &self.descriptor
    }

    pub fn descriptor_mut(&mut self) -> &mut FilenameDescriptor {
        &mut self.descriptor
    }

    /// Filename for the descriptor as it currently stands.
    pub fn filename(&self) -> NamingResult<String> {
        self.descriptor.try_render_with(&self.template)
    }

    /// Bump the version (or set it) and return the new filename. An
    /// undetermined version counts as zero before stepping.
    pub fn next_version(&mut self, explicit: Option<i64>) -> NamingResult<String> {
        self.descriptor.next(explicit, 1);
        self.filename()
    }

    /// `maya/scenes/{folder}`, with rig sub-disciplines nested under `rig/`.
    pub fn discipline_folder(&self) -> String {
        let discipline = self.descriptor.discipline;
        if discipline.is_rig_variant() {
            format!("{SCENES_FOLDER}/rig/{}", discipline.folder_name())
        } else {
            format!("{SCENES_FOLDER}/{}", discipline.folder_name())
        }
    }

    /// Full destination path of the next save.
    pub fn destination(&self) -> Result<String, SaveError> {
        let shot_path = self.hierarchy.try_build_path()?;
        let filename = self.filename()?;
        Ok(format!("{shot_path}/{}/{filename}", self.discipline_folder()))
    }
}
