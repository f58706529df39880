//! Shared domain vocabulary for the submission lifecycle services.
//!
//! This crate holds the pieces every other layer agrees on:
//!
//! - scalar type aliases ([`types`])
//! - well-known phase, role, status, and upload-type names matching the
//!   platform's seeded lookup catalogs ([`phases`], [`roles`], [`statuses`],
//!   [`upload_types`])
//! - well-known project and resource property keys with their parse
//!   helpers ([`properties`])
//! - pure name/id lookups over fetched catalogs ([`catalog`])
//! - argument validation helpers ([`validation`])
//!
//! No I/O happens here; everything is plain data and pure functions.

pub mod catalog;
pub mod phases;
pub mod properties;
pub mod roles;
pub mod statuses;
pub mod types;
pub mod upload_types;
pub mod validation;
