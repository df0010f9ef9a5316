//! Inquiry intake implementations.

mod http;
mod memory;

pub use http::{HttpInquiryIntake, HttpIntakeConfig};
pub use memory::InMemoryInquiryIntake;
