//! Library member model and id allocation.
//!
//! # Responsibility
//! - Define standard and student member records.
//! - Provide the counter that hands out member ids.
//!
//! # Invariants
//! - Ids handed out by one `MemberIdCounter` are strictly increasing by one.
//! - Persisted member ids are never restored; every constructed member takes
//!   the next counter value.

/// Counter-assigned member identifier.
pub type MemberId = i64;

/// First id handed out by a default counter.
pub const FIRST_MEMBER_ID: MemberId = 1001;

/// Variant-specific member payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Standard,
    /// Student member with a free-form school identifier.
    Student { student_id: String },
}

/// One person entitled to borrow items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub kind: MemberKind,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn standard(id: MemberId, name: impl Into<String>) -> Self {
        Self::new(id, name, MemberKind::Standard)
    }

    pub fn student(id: MemberId, name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self::new(
            id,
            name,
            MemberKind::Student {
                student_id: student_id.into(),
            },
        )
    }

    /// Returns the student identifier for student members.
    pub fn student_id(&self) -> Option<&str> {
        match &self.kind {
            MemberKind::Standard => None,
            MemberKind::Student { student_id } => Some(student_id.as_str()),
        }
    }
}

/// Monotonic member id source owned by a catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberIdCounter {
    next: MemberId,
}

impl MemberIdCounter {
    pub fn starting_at(first: MemberId) -> Self {
        Self { next: first }
    }

    /// Returns the id the next allocation will hand out.
    pub fn peek(&self) -> MemberId {
        self.next
    }

    /// Hands out the current id and advances the counter.
    ///
    /// The start value must leave room below `MemberId::MAX`; configured
    /// starts are bounded by `LibraryConfig` validation.
    pub fn allocate(&mut self) -> MemberId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for MemberIdCounter {
    fn default() -> Self {
        Self::starting_at(FIRST_MEMBER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberIdCounter, FIRST_MEMBER_ID};

    #[test]
    fn counter_hands_out_consecutive_ids() {
        let mut counter = MemberIdCounter::default();
        assert_eq!(counter.allocate(), FIRST_MEMBER_ID);
        assert_eq!(counter.allocate(), FIRST_MEMBER_ID + 1);
        assert_eq!(counter.peek(), FIRST_MEMBER_ID + 2);
    }
}
