//! Port definitions — traits that drivers implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the monitor and the binary
//! can depend on them without creating circular dependencies.

pub mod clock;

pub use clock::{Clock, SimulatedClock, SystemClock};
