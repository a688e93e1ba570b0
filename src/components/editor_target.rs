//! Editor Target
//!
//! What the goal editor is currently working on.

use crate::models::Goal;

/// Goal editor target: a brand new goal, or an existing one
#[derive(Clone, PartialEq)]
pub enum EditTarget {
    New,
    Edit(Goal),
}
