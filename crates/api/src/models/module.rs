use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Module name stored in binary metadata when the compiler was not given one.
pub const DEFAULT_MODULE_NAME: &str = "main";

/// Identifier of a compiled module, used as the join key across providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(SmolStr);

impl ModuleName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::from(name.as_ref()))
    }

    /// The name standing in for "no module name was recorded".
    pub fn default_module() -> Self {
        Self(SmolStr::new_static(DEFAULT_MODULE_NAME))
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_MODULE_NAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModuleName {
    fn default() -> Self {
        Self::default_module()
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(SmolStr::from(s))
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
