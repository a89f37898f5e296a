//! Shard transports for the Pubgrid client
//!
//! Available transports:
//! - `http` - static file host over HTTP (the usual deployment)
//! - `fs` - local dataset directory

pub mod fs;
pub mod http;
