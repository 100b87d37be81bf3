//! Tag domain entities.

pub mod model;

pub use model::{Tag, normalize_tag_names};
