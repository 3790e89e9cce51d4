//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  Everything runs on the host with no database
//! or UI required.

mod mock_sink;
mod region_store_tests;
mod service_flow_tests;
