//! Domain entities - the core business objects.

mod inquiry;

pub use inquiry::{Audience, Inquiry};
