//! Data models for the BrandSnap backend.
//!
//! Field names follow the camelCase JSON layout used by the web client and the persisted vault.

mod brand_kit;
mod diff;
mod generate;
mod version;

pub use brand_kit::*;
pub use diff::*;
pub use generate::*;
pub use version::*;
