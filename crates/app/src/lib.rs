//! # casualtydash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement:
//!   - `AssetSource` — list the files of one category directory
//! - Define the **use-case** that drives it:
//!   - `CatalogService` — scan every category once and assemble the
//!     `AssetCatalog` the dashboard is rendered from
//!
//! ## Dependency rule
//! Depends on `casualtydash-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
