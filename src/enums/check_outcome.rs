use crate::structs::verdict::Verdict;

/// How a check run ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Skipped,
    Passed(Verdict),
    /// Not passed, tolerated because fail-on-miss is disabled.
    NotPassed(Verdict),
}
