//! Catalog item model.
//!
//! # Responsibility
//! - Define the borrowable record shared by all item variants.
//! - Provide issue-state helpers used by the catalog service.
//!
//! # Invariants
//! - `id` is supplied by the caller or the loader verbatim; uniqueness is not
//!   enforced.
//! - `issued` starts as `false` and only ever moves to `true`.
//! - A book's `page_count` must be positive.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-assigned item identifier.
pub type ItemId = i64;

/// Variant-specific item payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Printed book.
    Book {
        author: String,
        /// Must be greater than zero.
        page_count: u32,
    },
}

/// One borrowable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Set once by a successful issue; there is no return operation.
    pub issued: bool,
    pub kind: ItemKind,
}

/// Validation failures for item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    ZeroPageCount { item_id: ItemId },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPageCount { item_id } => {
                write!(f, "item {item_id}: page count must be positive")
            }
        }
    }
}

impl Error for RecordValidationError {}

impl Item {
    /// Creates an available book.
    ///
    /// Does not validate; call [`Item::validate`] before storing caller input.
    pub fn book(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            issued: false,
            kind: ItemKind::Book {
                author: author.into(),
                page_count,
            },
        }
    }

    /// Checks variant field invariants.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        match &self.kind {
            ItemKind::Book { page_count, .. } if *page_count == 0 => {
                Err(RecordValidationError::ZeroPageCount { item_id: self.id })
            }
            ItemKind::Book { .. } => Ok(()),
        }
    }

    /// Returns whether the item can still be issued.
    pub fn is_available(&self) -> bool {
        !self.issued
    }

    pub fn mark_issued(&mut self) {
        self.issued = true;
    }
}
