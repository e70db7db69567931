//! Grid Persistence
//!
//! Rebuilding domain values from opaque structured data. The only failure
//! mode here is malformed input; reconstruction is a one-shot,
//! side-effect-free attempt with no retry.

pub mod builder;
pub mod error;
pub mod view;

pub use builder::{CraftingGridBuilder, DataBuilder};
pub use error::InvalidDataError;
pub use view::DataView;
