//! Record model for catalog items and members.
//!
//! # Responsibility
//! - Define the value shapes stored by the catalog.
//! - Keep variant-specific fields in closed enums so codec and display code
//!   match exhaustively.
//!
//! # Invariants
//! - Item ids are caller assigned and never generated here.
//! - Member ids come from a `MemberIdCounter` owned by the catalog store.

pub mod item;
pub mod member;
