use crate::error::MetadataError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;

/// Identifies an annotation class by its qualified name.
///
/// Stored the way binary metadata spells class ids: a `/`-separated package path and a
/// `.`-separated class name relative to that package, e.g. `kotlin/jvm/JvmName` or
/// `org/example/Outer.Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnnotationId {
    package: SmolStr,
    relative_name: SmolStr,
}

impl AnnotationId {
    /// Build from an already split package path (`/` separated) and relative class name.
    pub fn new(package: &str, relative_name: &str) -> Result<Self, MetadataError> {
        if relative_name.is_empty() || relative_name.contains('/') {
            let raw = if package.is_empty() {
                relative_name.to_string()
            } else {
                format!("{package}/{relative_name}")
            };
            return Err(MetadataError::InvalidAnnotationId(raw));
        }
        Ok(Self {
            package: SmolStr::from(package),
            relative_name: SmolStr::from(relative_name),
        })
    }

    /// Parse the binary class-id form. The last `/` splits package from class name;
    /// every package segment must be non-empty.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        match raw.rfind('/') {
            Some(idx) => {
                let package = &raw[..idx];
                if package.split('/').any(str::is_empty) {
                    return Err(MetadataError::InvalidAnnotationId(raw.to_string()));
                }
                Self::new(package, &raw[idx + 1..])
            }
            None => Self::new("", raw),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn relative_name(&self) -> &str {
        &self.relative_name
    }

    /// Simple name of the innermost class.
    pub fn short_name(&self) -> &str {
        self.relative_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.relative_name)
    }

    pub fn is_nested(&self) -> bool {
        self.relative_name.contains('.')
    }

    /// Dotted fully qualified name, e.g. `kotlin.jvm.JvmName`.
    pub fn as_fqn(&self) -> String {
        if self.package.is_empty() {
            self.relative_name.to_string()
        } else {
            format!("{}.{}", self.package.replace('/', "."), self.relative_name)
        }
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.relative_name)
        } else {
            write!(f, "{}/{}", self.package, self.relative_name)
        }
    }
}

impl FromStr for AnnotationId {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AnnotationId {
    type Error = MetadataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AnnotationId> for String {
    fn from(value: AnnotationId) -> Self {
        value.to_string()
    }
}
