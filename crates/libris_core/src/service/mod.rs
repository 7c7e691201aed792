//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog store and codec calls into shell-facing operations.
//! - Keep the terminal shell decoupled from storage details.

pub mod catalog_service;
