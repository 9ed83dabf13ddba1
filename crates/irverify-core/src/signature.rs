//! Canonical member signatures.
//!
//! A [`SignatureString`] is the erased name/type identity of a member. Two
//! members with equal signature strings denote the same logical symbol, even
//! when one comes from the descriptor model and the other from the IR.

use std::fmt;

/// Canonical textual identity of a member, e.g. `foo(kotlin.Int):kotlin.String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignatureString(String);

impl SignatureString {
    /// Wrap an already-canonical signature.
    pub fn new(signature: impl Into<String>) -> Self {
        Self(signature.into())
    }

    /// The signature text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SignatureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Sort signatures into their canonical order.
///
/// Declaration order carries no meaning for comparison, so both sides of a
/// comparison are sorted before they are checked. Duplicates are kept.
pub fn canonicalize(signatures: impl IntoIterator<Item = SignatureString>) -> Vec<SignatureString> {
    let mut sorted: Vec<_> = signatures.into_iter().collect();
    sorted.sort();
    sorted
}

/// Sorted list of signatures as it appears in fault messages: `[a, b, c]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureList(pub Vec<SignatureString>);

impl SignatureList {
    /// Build a list, sorting the input.
    pub fn sorted(signatures: impl IntoIterator<Item = SignatureString>) -> Self {
        Self(canonicalize(signatures))
    }

    /// Check if every signature in `other` is present in this list.
    pub fn contains_all(&self, other: &SignatureList) -> bool {
        other.0.iter().all(|sig| self.0.binary_search(sig).is_ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignatureString> {
        self.0.iter()
    }
}

impl fmt::Display for SignatureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, sig) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sig)?;
        }
        f.write_str("]")
    }
}
