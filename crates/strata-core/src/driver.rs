//! What the generators need to know about the target database.

mod capability;
pub use capability::{Capability, LimitStyle, PlaceholderStyle};
