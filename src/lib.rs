//! Gym Membership Registry Library
//!
//! This library crate defines the modules behind the `gym-membership` binary (`main.rs`).
//!
//! ## Modules
//! - **`membership`**: The membership record, the in-memory registry and its HTTP handlers.
//! - **`server`**: Configuration, router construction and the serve loop.
//!
//! Tests build the router with [`server::build_router`] and a fresh registry;
//! only the binary binds a socket.

pub mod membership;
pub mod server;
