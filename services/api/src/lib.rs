//! services/api/src/lib.rs
//!
//! Library root for the `api` service: configuration, adapters, and the
//! web layer, shared by the `api` and `openapi` binaries.

pub mod adapters;
pub mod config;
pub mod error;
pub mod seed;
pub mod web;
