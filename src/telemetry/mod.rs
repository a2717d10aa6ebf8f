//! Telemetry data model posted to the LoraGuard API.
//!
//! An envelope bundles the server identity, its runtime environment and a
//! batch of events. Event `data` is an open JSON object: the API imposes no
//! schema on it, so neither do we.

pub mod clock;
pub mod event;
pub mod payload;
pub mod sample;
