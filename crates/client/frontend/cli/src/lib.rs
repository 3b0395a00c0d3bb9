//! Line-oriented terminal frontend for the hive game.
//!
//! # Architecture
//!
//! [`ConsoleFrontend`] is a pure presentation layer that:
//! - Receives any [`runtime::TurnProtocol`] implementation
//! - Does NOT own the runtime
//! - Reads commands from an async line source and prints events to a writer

mod app;
mod config;
mod error;
mod input;
pub mod logging;
pub mod presentation;

pub use app::ConsoleFrontend;
pub use config::CliConfig;
pub use error::ClientError;
pub use input::{PlayerCommand, UnknownCommand};
