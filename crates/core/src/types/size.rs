//! Size labels for products with a size dimension.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A size label such as `"M"` or `"XL"`.
///
/// The empty label stands for "no size dimension" and is what cart lines
/// carry for products that are not sold by size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Create a size from a label, stored exactly as given.
    ///
    /// Labels are compared byte for byte, so `"M"` and `" M"` are different
    /// sizes.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The size used by products without a size dimension.
    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the "no size" label.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Size {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for Size {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
