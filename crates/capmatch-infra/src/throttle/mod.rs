//! Request throttling implementations.

mod memory;

pub use memory::{FixedWindowThrottle, ThrottleConfig};
