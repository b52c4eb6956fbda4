//! # casualtydash-domain
//!
//! Pure domain model for the casualty events dashboard.
//!
//! ## Responsibilities
//! - Define the six fixed asset **Categories** and what each one expects
//!   on disk (directory, file extension, how it is embedded)
//! - Define the **Extension** filter used when listing a directory
//! - Define the **AssetCatalog** — the category → file-name mapping built
//!   once at startup
//! - Build the declarative **Page** layout from a catalog
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never touches the filesystem. Directory listing is expressed as a
//! port trait in the `app` crate.

pub mod error;
pub mod time;

pub mod catalog;
pub mod category;
pub mod extension;
pub mod layout;
