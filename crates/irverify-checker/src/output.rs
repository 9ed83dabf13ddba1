//! Result of a checker run.

use std::fmt;

use irverify_core::{FakeOverrideError, FqName, MangleError};

/// Why a class was not compared against its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Local or anonymous class.
    NoClassId,
    /// No descriptor found in the module or its dependencies.
    NoDescriptor,
    /// Enum entries are never compared.
    EnumEntry,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoClassId => "no class id",
            SkipReason::NoDescriptor => "no descriptor",
            SkipReason::EnumEntry => "enum entry",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class the validator skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClass {
    /// Fully qualified name, or the simple name for local classes.
    pub name: FqName,
    pub reason: SkipReason,
}

/// Output of a checker run.
#[derive(Debug, Default)]
pub struct CheckOutput {
    /// Number of classes compared against a descriptor.
    pub classes_validated: usize,
    /// Classes skipped on purpose, in traversal order.
    pub classes_skipped: Vec<SkippedClass>,
    /// Number of fake-override members whose signatures were compared.
    pub fake_overrides_compared: usize,
    /// Members left out of comparison because no signature could be computed.
    pub members_skipped: Vec<MangleError>,
    /// Faults in traversal order.
    pub faults: Vec<FakeOverrideError>,
}

impl CheckOutput {
    /// Check if no fault was found.
    pub fn is_success(&self) -> bool {
        self.faults.is_empty()
    }

    /// Number of skipped classes with `reason`.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.classes_skipped
            .iter()
            .filter(|skipped| skipped.reason == reason)
            .count()
    }

    /// The first fault as an error.
    pub fn into_result(self) -> Result<(), FakeOverrideError> {
        match self.faults.into_iter().next() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}
