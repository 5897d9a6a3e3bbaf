//! Operational collaborators: server health probes and process lifecycle.
//!
//! These never feed into the audit score; they share the config and the
//! console style and report through the same exit-code convention.

pub mod health;
pub mod process;
