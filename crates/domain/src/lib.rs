//! # restohub-domain
//!
//! Pure domain model for the restohub restaurant directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Restaurants** (the single record type, with name, address and phone)
//! - Define the insert payload and partial-update changeset
//! - Hold the required-field check used by the admin page before it talks
//!   to the API
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//! It also compiles to WASM, since the admin page shares these types.

pub mod error;
pub mod id;

pub mod restaurant;
