//! # Timezone computation core
//!
//! Pure, stateless timezone arithmetic consumed synchronously by the MCP
//! handler layer. No network, disk, or shared mutable state; everything is
//! derived from the IANA timezone database and an injectable time source.
//!
//! ## Modules
//! - `clock`: time-source abstraction and current-time/offset queries
//! - `converter`: wall-clock conversion between two zones
//! - `error`: domain error types
//! - `models`: snapshot and conversion value types, request payloads
//! - `utils`: format constants and offset-difference rendering

pub mod clock;
pub mod converter;
pub mod error;
pub mod models;
pub mod utils;
