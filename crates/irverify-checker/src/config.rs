//! Checker configuration.

/// What to do after the first fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the traversal at the first fault.
    #[default]
    FailFast,
    /// Validate every class and report all faults in traversal order.
    CollectAll,
}

/// Which classes get their overridden-symbol edges checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkCheckScope {
    /// Only classes that are compared against a descriptor.
    #[default]
    ValidatedClasses,
    /// Every class the walker reaches. This adds classes without a
    /// descriptor and local classes declared in property initializers or
    /// init blocks. Function and constructor bodies are never entered, so
    /// local classes declared there are not checked.
    AllClasses,
}

/// Configuration for [`FakeOverrideChecker`](crate::FakeOverrideChecker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerConfig {
    pub failure_policy: FailurePolicy,
    pub link_check_scope: LinkCheckScope,
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_link_check_scope(mut self, scope: LinkCheckScope) -> Self {
        self.link_check_scope = scope;
        self
    }

    /// Shorthand for [`FailurePolicy::CollectAll`].
    pub fn collect_all(self) -> Self {
        self.with_failure_policy(FailurePolicy::CollectAll)
    }

    pub fn is_fail_fast(&self) -> bool {
        self.failure_policy == FailurePolicy::FailFast
    }
}
