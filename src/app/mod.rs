//! Application layer: state store, command handlers and side effects.
//!
//! This module sits between the plugin runtime (main.rs) and the view layer.
//! It implements a unidirectional loop in which every state change is followed
//! by a full re-projection of the view.
//!
//! # Architecture
//!
//! ```text
//! User Input → Binding → Command → handle_command → Store::apply → Projection
//!                                        ↓
//!                                   Vec<Action> → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the command handlers and the [`Host`] seam
//! - [`form`]: Edit form values and profile reconstruction
//! - [`handler`]: Command transition table
//! - [`modes`]: View and detail tab enums
//! - [`state`]: Application state and partial updates
//! - [`store`]: State owner with the single update entry point

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::{perform, Action, Host};
pub use form::{EditForm, FormField};
pub use handler::{handle_command, Command};
pub use modes::{DetailTab, ViewMode};
pub use state::{AppState, StateUpdate};
pub use store::{Projection, Store};
