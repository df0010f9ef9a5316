//! # CapMatch Infrastructure
//!
//! Concrete implementations of the ports defined in `capmatch-core`:
//! the in-process request throttle and the inquiry intake adapters.

pub mod intake;
pub mod throttle;

pub use intake::{HttpInquiryIntake, HttpIntakeConfig, InMemoryInquiryIntake};
pub use throttle::{FixedWindowThrottle, ThrottleConfig};
