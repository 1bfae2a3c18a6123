//! Symbolic discriminators used to route hooks.
//!
//! A [`Kind`] names a sub-classification of an outcome. Names known at
//! compile time are borrowed for `'static`; names built at runtime are
//! reference counted, so cloning a kind never copies its text and the text is
//! freed once the last outcome carrying it is dropped.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Symbolic atom sub-classifying an outcome, such as `valid` or `not_found`.
///
/// Kinds compare, order and hash by name only.
///
/// # Examples
///
/// ```
/// use service_outcome::Kind;
///
/// const VALID: Kind = Kind::from_static("valid");
/// let runtime = Kind::new(&String::from("valid"));
/// assert_eq!(runtime, VALID);
/// assert_eq!(runtime.as_str(), "valid");
/// ```
#[derive(Clone)]
pub struct Kind(Repr);

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Shared(Arc<str>),
}

impl Kind {
    /// Builds a kind from a runtime name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Repr::Shared(Arc::from(name)))
    }

    /// Wraps a `'static` name without allocating. Usable in `const` items.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Repr::Static(name))
    }

    /// The name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Static(name) => *name,
            Repr::Shared(name) => name.as_ref(),
        }
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> Option<std::sync::Weak<str>> {
        match &self.0 {
            Repr::Static(_) => None,
            Repr::Shared(name) => Some(Arc::downgrade(name)),
        }
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Kind {}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.as_str())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Kind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Self(Repr::Shared(Arc::from(name)))
    }
}

impl PartialEq<str> for Kind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Kind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
