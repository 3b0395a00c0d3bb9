//! Events emitted by the turn worker.
//!
//! The driver receives each event through its protocol call; observers get a
//! copy through the [`EventBus`].

mod bus;
mod types;

pub use bus::EventBus;
pub use types::GameEvent;
