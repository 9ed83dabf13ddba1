//! Class identity shared by the descriptor and IR models.
//!
//! A [`ClassId`] is computed the same way by resolution and by lowering, so it
//! is the key used to pull the matching class out of each model.
//!
//! # Examples
//!
//! ```
//! use irverify_core::{ClassId, FqName};
//!
//! let inner = ClassId::top_level("demo.pkg", "Outer").nested("Inner");
//! assert_eq!(inner.to_string(), "demo.pkg.Outer.Inner");
//! assert_eq!(inner.outer_class(), Some(ClassId::top_level("demo.pkg", "Outer")));
//! assert_eq!(inner.short_name(), "Inner");
//!
//! let root = ClassId::new(FqName::ROOT, FqName::from("Main"), false);
//! assert_eq!(root.to_string(), "Main");
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// A dot-separated qualified name (`kotlin.collections.List`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FqName(String);

impl FqName {
    /// The root (empty) package.
    pub const ROOT: FqName = FqName(String::new());

    /// Create a name from a dotted string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Check if this is the root package.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The dotted representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments. Empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// Last segment (`List` for `kotlin.collections.List`).
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or("")
    }

    /// Append a segment.
    pub fn child(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Drop the last segment. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('.') {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::ROOT),
        }
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FqName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FqName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Stable identity of a class: package plus the dotted path of enclosing
/// classes.
///
/// Local classes (declared inside a function body) carry `is_local = true`
/// and are never cross-referenced by qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    /// Package the class lives in.
    pub package: FqName,
    /// Path from the outermost class to this one (`Outer.Inner`).
    pub relative_name: FqName,
    /// Declared in a local scope.
    pub is_local: bool,
}

impl ClassId {
    /// Create a class id.
    pub fn new(package: FqName, relative_name: FqName, is_local: bool) -> Self {
        Self {
            package,
            relative_name,
            is_local,
        }
    }

    /// Create an id for a top-level, non-local class.
    pub fn top_level(package: impl Into<FqName>, name: &str) -> Self {
        Self::new(package.into(), FqName::ROOT.child(name), false)
    }

    /// Id of a class nested directly inside this one.
    pub fn nested(&self, name: &str) -> Self {
        Self::new(
            self.package.clone(),
            self.relative_name.child(name),
            self.is_local,
        )
    }

    /// Id of the enclosing class, if this class is nested.
    pub fn outer_class(&self) -> Option<Self> {
        let parent = self.relative_name.parent()?;
        if parent.is_root() {
            None
        } else {
            Some(Self::new(self.package.clone(), parent, self.is_local))
        }
    }

    /// Simple name of the class.
    pub fn short_name(&self) -> &str {
        self.relative_name.short_name()
    }

    /// Check if the class is nested in another class.
    pub fn is_nested(&self) -> bool {
        self.outer_class().is_some()
    }

    /// Fully qualified name (`package.Outer.Inner`).
    pub fn as_fq_name(&self) -> FqName {
        if self.package.is_root() {
            self.relative_name.clone()
        } else {
            FqName::new(format!("{}.{}", self.package, self.relative_name))
        }
    }

    /// Deterministic hash of this id.
    pub fn class_hash(&self) -> ClassHash {
        ClassHash::from_class_id(self)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_root() {
            write!(f, "{}", self.relative_name)
        } else {
            write!(f, "{}.{}", self.package, self.relative_name)
        }
    }
}

/// Domain separator so that package `a.b` + class `C` never collides with
/// package `a` + class `b.C`.
const PACKAGE_SEP: u64 = 0x4bc94d6bd06053ad;

/// Marker mixed into hashes of local class ids.
const LOCAL: u64 = 0x1a095090689d4647;

/// A deterministic 64-bit hash of a [`ClassId`].
///
/// Equal ids always produce equal hashes, across runs and across models.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassHash(pub u64);

impl ClassHash {
    /// Compute the hash of a class id.
    #[inline]
    pub fn from_class_id(id: &ClassId) -> Self {
        let package = xxh64(id.package.as_str().as_bytes(), 0);
        let relative = xxh64(id.relative_name.as_str().as_bytes(), PACKAGE_SEP);
        let local = if id.is_local { LOCAL } else { 0 };
        ClassHash(package.rotate_left(17) ^ relative ^ local)
    }
}

impl fmt::Debug for ClassHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassHash({:#018x})", self.0)
    }
}
