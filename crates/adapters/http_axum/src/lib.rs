//! # casualtydash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered dashboard page** at `/`, built once
//!   from the asset catalog
//! - Serve the **asset files** themselves under `/assets/` straight from the
//!   assets root
//! - Serve a small **read-only JSON view** of the catalog under `/api`
//!
//! ## No-JS dashboard approach
//! - The page is complete HTML rendered with askama templates.
//! - Charts are `<img>` tags, maps are `<iframe>` tags pointing at the
//!   pre-generated HTML fragments. Nothing on the page calls back into the
//!   server.
//!
//! ## Dependency rule
//! Depends on `casualtydash-domain` for the catalog and layout types.
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
