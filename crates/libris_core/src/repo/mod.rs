//! Catalog store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own item and member records for the process lifetime.
//! - Return semantic errors (`ItemNotFound`, `MemberNotFound`,
//!   `AlreadyIssued`) instead of sentinel values.
//!
//! # Invariants
//! - Insertion order is list order; records are never reordered.
//! - Lookups are linear scans where the first match wins.

pub mod catalog_repo;
