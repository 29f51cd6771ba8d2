//! # regionwatch-domain
//!
//! Pure domain model for recurring time-of-day regions.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, clock reads
//! - Define the **time range** (open interval on the 24-hour line)
//! - Define the **day filter** (weekdays on which a region is evaluated)
//! - Define **appearance** payloads (text, icon, colors) carried by a region
//! - Define **region events** (`entered` / `left`) and their synchronous dispatch
//! - Define the **temporal region** aggregate and its edge detector
//! - Map regions to and from their structured JSON form
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary.
//! Clock sources and drivers are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod appearance;
pub mod color;
pub mod day_filter;
pub mod dispatch;
pub mod event;
pub mod range;
pub mod region;
pub mod serial;
