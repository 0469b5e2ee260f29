//! Response store adapters.

mod json_store;
mod memory;

pub use json_store::{HistoryStatistics, JsonFileResponseStore, TIMESTAMP_KEY};
pub use memory::InMemoryResponseStore;
