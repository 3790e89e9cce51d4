//! Application core — scoring orchestration, zero I/O.
//!
//! This module wires the pure scoring functions to a stream of readings:
//! per-session history, event emission, and command handling.  All
//! interaction with persistence and presentation happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without a database or UI.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
