//! # casualtydash-adapter-assets-fs
//!
//! Filesystem adapter for the asset source port.
//!
//! ## Responsibilities
//! - Implement `casualtydash_app::ports::AssetSource` on top of `std::fs`
//! - Resolve category directories against a configurable assets root
//! - Map `std::io` failures onto the domain error taxonomy
//!
//! ## Dependency rule
//! Depends on `casualtydash-app` (for the port trait) and
//! `casualtydash-domain` (for domain types). The `app` and `domain` crates
//! must never reference this adapter.

pub mod error;
pub mod source;

pub use error::ScanError;
pub use source::FsAssetSource;
