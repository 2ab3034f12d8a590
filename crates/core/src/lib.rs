//! Storybound Core - Shared types library.
//!
//! This crate provides the common types used by the Storybound storefront:
//! type-safe IDs, integer-cent prices, and the catalog `Product` record.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
