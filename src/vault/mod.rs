//! The Brand Vault: bounded, per-business version history of generated brand kits.
//!
//! The vault is one JSON blob in the key-value store. Every mutation is a
//! read-modify-write of that blob, serialized within this process by the
//! [`Vault`] write lock. Separate processes sharing the database file are not
//! coordinated: the last writer wins.

mod diff;
mod format;
mod manager;
mod repository;

pub use diff::compare_brand_kits;
pub use format::format_relative_time;
pub use manager::Vault;
pub use repository::VaultRepository;
