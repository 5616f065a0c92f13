//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types
//! - `wire.rs`: Recognition of raw backend payloads
//! - `convert.rs`: Conversions from wire payloads with validation
//! - `state.rs`: State containers with update methods
//! - `client.rs`: Sub-client with HTTP methods

pub mod candle;
pub mod market;
