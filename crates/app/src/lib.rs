//! # regionwatch-app
//!
//! Application layer — clock **ports** and the region monitor.
//!
//! ## Responsibilities
//! - Define the `Clock` port that drivers read the current instant from,
//!   with a system implementation and a simulated one for replays and tests
//! - Provide `RegionMonitor`, which owns a set of temporal regions, keeps
//!   them ordered by start time and feeds every region the same instant
//! - Log transitions; the domain crate itself never logs
//!
//! ## Dependency rule
//! Depends on `regionwatch-domain` only (plus `chrono` and `tracing`).
//! Never imports the binary. The binary depends on *this* crate, not the reverse.

pub mod monitor;
pub mod ports;
