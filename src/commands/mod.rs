//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — config and service catalog command trees.
//! - `runtime.rs` — show/select/deselect/hours/save/history.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_config_commands, handle_service_commands};
pub use runtime::handle_runtime_commands;
