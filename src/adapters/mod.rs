//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `log_sink`     | EventSink          | `log` facade             |
//! | `mem_storage`  | StoragePort        | In-memory ordered map    |
//! | `region_store` | RegionRepository   | Any StoragePort          |

pub mod log_sink;
pub mod mem_storage;
pub mod region_store;
