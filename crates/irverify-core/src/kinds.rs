//! Declaration metadata shared by both models.

use std::fmt;

/// Access-control tier of a member.
///
/// `InvisibleFake` marks fake overrides of members that are not visible from
/// the inheriting class (e.g. a package-private member inherited across
/// packages). They exist in the descriptor model only and are never
/// materialized by lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Visibility {
    /// Accessible from everywhere.
    #[default]
    Public,
    /// Accessible from the class and its subclasses.
    Protected,
    /// Accessible from the same module.
    Internal,
    /// Accessible from the declaring scope only.
    Private,
    /// Inherited but not accessible.
    InvisibleFake,
}

impl Visibility {
    /// Check if this is the internal tier.
    pub fn is_internal(self) -> bool {
        matches!(self, Visibility::Internal)
    }

    /// Check if members with this visibility take part in fake-override
    /// comparison at all.
    pub fn is_comparable(self) -> bool {
        !matches!(self, Visibility::Private | Visibility::InvisibleFake)
    }

    /// Lowercase keyword used in dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
            Visibility::InvisibleFake => "invisible_fake",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    EnumClass,
    /// A single entry of an enum class with its own body.
    EnumEntry,
    AnnotationClass,
    Object,
}

impl ClassKind {
    /// Check if this is an enum entry.
    pub fn is_enum_entry(self) -> bool {
        matches!(self, ClassKind::EnumEntry)
    }

    /// Uppercase keyword used in dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            ClassKind::Class => "CLASS",
            ClassKind::Interface => "INTERFACE",
            ClassKind::EnumClass => "ENUM_CLASS",
            ClassKind::EnumEntry => "ENUM_ENTRY",
            ClassKind::AnnotationClass => "ANNOTATION_CLASS",
            ClassKind::Object => "OBJECT",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
