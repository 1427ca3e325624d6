//! Folio - portfolio media server
//!
//! This library crate exposes the configuration and HTTP server for
//! integration testing; media resolution itself lives in `folio-media`.

pub mod config;
pub mod server;
