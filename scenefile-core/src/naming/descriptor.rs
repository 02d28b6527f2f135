use std::fmt::{self, Display, Formatter};

use scenefile_model::Discipline;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::inference::{
    infer_description, infer_discipline, infer_extension, infer_initials, infer_version,
};
use super::template::{FilenameTemplate, TemplateFields};
use super::{DEFAULT_DESCRIPTION, DEFAULT_EXTENSION, DEFAULT_VERSION};
use crate::error::{NamingError, NamingResult};

/// Structured metadata describing one scene filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameDescriptor {
    pub description: String,
    pub discipline: Discipline,
    /// Negative while undetermined; must be set before rendering.
    pub version: i64,
    /// Two-letter author tag, empty when unknown.
    pub initials: String,
    /// Free-form suffix, omitted from the filename when `None`.
    pub optional: Option<String>,
    /// Extension without the leading dot.
    pub extension: String,
}

impl Default for FilenameDescriptor {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            discipline: Discipline::default(),
            version: DEFAULT_VERSION,
            initials: String::new(),
            optional: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl FilenameDescriptor {
    pub fn new(
        description: impl Into<String>,
        discipline: Discipline,
        version: i64,
        initials: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            discipline,
            version,
            initials: initials.into(),
            ..Self::default()
        }
    }

    pub fn with_optional(mut self, optional: impl Into<String>) -> Self {
        self.optional = Some(optional.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Infer every field from an existing filename.
    ///
    /// Fields without a candidate keep their sentinel: the version becomes
    /// [`super::UNDETERMINED_VERSION`] and the initials stay empty.
    pub fn from_existing(filename: &str) -> Self {
        let descriptor = Self {
            description: infer_description(filename),
            discipline: infer_discipline(filename),
            version: infer_version(filename),
            initials: infer_initials(filename),
            optional: None,
            extension: infer_extension(filename),
        };
        debug!(
            filename,
            description = %descriptor.description,
            discipline = %descriptor.discipline,
            version = descriptor.version,
            initials = %descriptor.initials,
            extension = %descriptor.extension,
            "inferred scene file fields"
        );
        descriptor
    }

    /// Set the version outright, or step it when `version` is `None`.
    ///
    /// No bounds are enforced; callers that need monotonic versions check
    /// that themselves.
    pub fn increment(&mut self, version: Option<i64>, step: i64) -> &mut Self {
        match version {
            Some(version) => self.version = version,
            None => self.version = self.version.saturating_add(step),
        }
        self
    }

    /// Move to the next version: `explicit` when given, otherwise `step` past
    /// the current one. An undetermined version counts as zero, so the first
    /// save of an unversioned file lands on `step`.
    pub fn next(&mut self, explicit: Option<i64>, step: i64) -> &mut Self {
        if explicit.is_none() && !self.has_version() {
            self.version = 0;
        }
        self.increment(explicit, step)
    }

    /// Stamp `initials` unless the file already carries some.
    pub fn fill_initials(&mut self, initials: &str) -> &mut Self {
        if self.initials.is_empty() {
            self.initials = initials.to_string();
        }
        self
    }

    pub fn has_version(&self) -> bool {
        self.version >= 0
    }

    /// Render with the default template.
    ///
    /// # Panics
    ///
    /// Panics when the version is undetermined; use [`Self::try_render`] to
    /// get an error instead.
    pub fn render(&self) -> String {
        self.render_with(&FilenameTemplate::default())
    }

    /// Render with `template`. Panics like [`Self::render`].
    pub fn render_with(&self, template: &FilenameTemplate) -> String {
        match self.try_render_with(template) {
            Ok(filename) => filename,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_render(&self) -> NamingResult<String> {
        self.try_render_with(&FilenameTemplate::default())
    }

    pub fn try_render_with(&self, template: &FilenameTemplate) -> NamingResult<String> {
        if !self.has_version() {
            return Err(NamingError::UndeterminedVersion(self.version));
        }
        let version = format!("{:03}", self.version);
        Ok(template.render(&TemplateFields {
            description: &self.description,
            discipline: self.discipline.code(),
            version: &version,
            initials: &self.initials,
            optional: self.optional.as_deref(),
            extension: &self.extension,
        }))
    }
}

impl Display for FilenameDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.version, self.discipline, self.initials)
    }
}

/// Initials derived from a login name: the first letter plus the first letter
/// of the last `-` separated part (`andres-weber` becomes `aw`).
pub fn initials_from_username(username: &str) -> String {
    let first = username.chars().next();
    let last = username
        .rsplit('-')
        .next()
        .and_then(|part| part.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_lowercase)
        .collect()
}
