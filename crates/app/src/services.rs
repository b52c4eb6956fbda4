//! Application services — use-case orchestration.

pub mod catalog_service;
