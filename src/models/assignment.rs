//! Class assignment model.
//!
//! A class assignment is one subject held by one teacher in one room.
//! The upstream portal exposes no stable identifier for subjects, so the
//! subject label (`name`) doubles as the identity key when two snapshots
//! are matched against each other.

use serde::{Deserialize, Serialize};

/// One subject occupying a period.
///
/// Field order matters for the derived `Ord`: subject name first, so sorted
/// assignment lists read alphabetically by subject.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassAssignment {
    /// Subject label (e.g. "Math", "Chemistry"). Identity key for matching.
    pub name: String,
    /// Teacher short name or full name, as delivered upstream.
    pub teacher: String,
    /// Room label.
    pub room: String,
}

impl ClassAssignment {
    /// Creates a new assignment.
    pub fn new(
        name: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            teacher: teacher.into(),
            room: room.into(),
        }
    }

    /// Replaces the teacher.
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    /// Replaces the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }
}
