//! Membership Registry Module
//!
//! Stores gym membership records in memory and exposes them over a small REST API.
//!
//! ## Core Concepts
//! - **Identity**: A membership is identified by its email, compared case-sensitively.
//! - **Uniqueness**: An email can be registered once. Cancelled records still count.
//! - **Soft cancellation**: Cancelling flips `isActive` to `false`; records are never deleted.
//!
//! ## Submodules
//! - **`registry`**: The concurrent store and the five registry operations.
//! - **`handlers`**: Axum request handlers and the HTTP error mapping.
//! - **`protocol`**: Endpoint paths, messages and request/response bodies.
//! - **`types`**: The `Member` record and `MembershipError`.

pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod types;
