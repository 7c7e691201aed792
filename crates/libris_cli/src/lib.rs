//! Terminal front end for the Libris catalog.

pub mod render;
pub mod session;
pub mod shell;

pub use session::{run_session, SessionOutcome};
pub use shell::{MenuChoice, MenuCommand, Shell};
