//! Domain types and HTTP gateway for the WeatherHub API.
//!
//! This crate provides:
//! - `model`: snapshot and history types as served by the API gateway
//! - `gateway`: the `Transport` seam, a reqwest-backed transport and the typed `Gateway`
//! - `error`: `GatewayError`
//! - `config`: API base URL resolution and request limits
//! - `icons` / `format`: display helpers shared by every front end

pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod icons;
pub mod model;
