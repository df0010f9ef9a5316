//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod intake;
mod throttle;

pub use intake::{InquiryIntake, IntakeError};
pub use throttle::{Admission, RequestThrottle};
