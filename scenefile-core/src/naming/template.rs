use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{NamingError, NamingResult};

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Z]+)\}").expect("placeholder regex should compile"));

/// Template used when no other is configured.
pub const DEFAULT_FILENAME_TEMPLATE: &str =
    "{DESCRIPTION}_{DISCIPLINE}_{VERSION}_{INITIALS}_{OPTIONAL}.{EXT}";

const REQUIRED_PLACEHOLDERS: [&str; 5] =
    ["DESCRIPTION", "DISCIPLINE", "VERSION", "INITIALS", "EXT"];
const OPTIONAL_PLACEHOLDER: &str = "OPTIONAL";

/// Values substituted into a [`FilenameTemplate`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateFields<'a> {
    pub description: &'a str,
    pub discipline: &'a str,
    pub version: &'a str,
    pub initials: &'a str,
    pub optional: Option<&'a str>,
    pub extension: &'a str,
}

/// A validated filename template with `{PLACEHOLDER}` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilenameTemplate {
    raw: String,
}

impl FilenameTemplate {
    pub fn new(raw: impl Into<String>) -> NamingResult<Self> {
        let raw = raw.into();
        for placeholder in PLACEHOLDER_PATTERN.captures_iter(&raw) {
            let name = &placeholder[1];
            if name != OPTIONAL_PLACEHOLDER && !REQUIRED_PLACEHOLDERS.contains(&name) {
                return Err(NamingError::UnknownPlaceholder(name.to_string()));
            }
        }
        for required in REQUIRED_PLACEHOLDERS {
            if !raw.contains(&format!("{{{required}}}")) {
                return Err(NamingError::MissingPlaceholder(required));
            }
        }
        Ok(Self { raw })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `fields` in a single pass. Without an optional tag the
    /// `{OPTIONAL}` slot is dropped together with the separator in front of it.
    pub fn render(&self, fields: &TemplateFields<'_>) -> String {
        let template = match fields.optional {
            Some(_) => self.raw.clone(),
            None => strip_optional(&self.raw),
        };

        PLACEHOLDER_PATTERN
            .replace_all(&template, |caps: &Captures<'_>| match &caps[1] {
                "DESCRIPTION" => fields.description.to_string(),
                "DISCIPLINE" => fields.discipline.to_string(),
                "VERSION" => fields.version.to_string(),
                "INITIALS" => fields.initials.to_string(),
                "OPTIONAL" => fields.optional.unwrap_or_default().to_string(),
                "EXT" => fields.extension.to_string(),
                other => format!("{{{other}}}"),
            })
            .into_owned()
    }
}

fn strip_optional(raw: &str) -> String {
    let slot = format!("{{{OPTIONAL_PLACEHOLDER}}}");
    let mut stripped = raw.to_string();
    while let Some(index) = stripped.find(&slot) {
        let start = match stripped[..index].chars().last() {
            Some(sep @ ('_' | '.' | '-')) => index - sep.len_utf8(),
            _ => index,
        };
        stripped.replace_range(start..index + slot.len(), "");
    }
    stripped
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_FILENAME_TEMPLATE.to_string(),
        }
    }
}

impl Display for FilenameTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for FilenameTemplate {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilenameTemplate> for String {
    fn from(template: FilenameTemplate) -> Self {
        template.raw
    }
}
