//! Result assembly.
//!
//! Composes the per-category outcomes into the immutable audit snapshot
//! and derives remediation recommendations.

pub mod aggregator;
pub mod recommend;

pub use aggregator::run_audit;
