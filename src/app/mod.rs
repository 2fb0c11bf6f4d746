//! App layer - the store and command processing
//!
//! The App actor owns the store, applies actions coming back from tasks,
//! handles UI events, and emits network commands and render state.

pub mod action;
pub mod reducer;
pub mod store;
pub mod state;
pub mod actor;
pub mod commands;

pub use action::Action;
pub use reducer::reduce;
pub use store::{Dispatcher, Store};
pub use state::{AppState, DashboardState, DevicesStatus};
pub use actor::AppActor;
