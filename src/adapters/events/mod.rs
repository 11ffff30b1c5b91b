//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that logs and captures events

mod in_memory;

pub use in_memory::InMemoryEventBus;
