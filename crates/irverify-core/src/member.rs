//! Capability shared by overridable members of both models.

use crate::Visibility;

/// A function or property that can be inherited as a fake override.
///
/// The descriptor model and the IR model both implement this, so tier
/// partitioning and comparison are written once against it.
pub trait OverridableMember {
    /// Simple name of the member.
    fn name(&self) -> &str;

    /// Visibility tier.
    fn visibility(&self) -> Visibility;

    /// Check if the member was synthesized from a supertype rather than
    /// declared.
    fn is_fake_override(&self) -> bool;
}
