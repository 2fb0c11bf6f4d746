//! Network layer - backend requests
//!
//! The Network actor receives commands and spawns tasks that report back
//! to the store as actions.

pub mod actor;
pub mod client;
pub mod tasks;

pub use actor::NetworkActor;
pub use client::ApiClient;
