//! Runtime orchestration for the hive combat simulation.
//!
//! This crate runs the game session as a background task and exposes the
//! blocking turn handshake through [`RuntimeHandle`]. Consumers embed
//! [`Runtime`] to start a session, drive it with [`TurnProtocol`], and
//! optionally observe events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides event payloads and the observer bus
//! - [`oracle`] provides the live RNG oracle
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Request, Result, RoundEvents, RuntimeError, RuntimeHandle, TurnProtocol};
pub use events::{EventBus, GameEvent};
pub use game_core::EventKind;
pub use oracle::EntropyRng;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
