//! Subject matching strategies.

use super::SubjectMatcher;
use crate::models::ClassAssignment;

/// Matches subjects by label equality.
///
/// Default strategy. Case and whitespace are significant, as the portal
/// delivers labels verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByName;

impl SubjectMatcher for ByName {
    fn name(&self) -> &'static str {
        "by-name"
    }

    fn is_same_subject(&self, base: &ClassAssignment, compare: &ClassAssignment) -> bool {
        base.name == compare.name
    }
}
