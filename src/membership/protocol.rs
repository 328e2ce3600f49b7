//! Membership HTTP Protocol
//!
//! Endpoint paths and the JSON bodies exchanged with clients.
//!
//! Request fields are optional at the serde level so that an absent field
//! and an empty string both reach the registry's presence checks instead of
//! failing deserialization.

use serde::{Deserialize, Serialize};

use super::types::Member;

// --- API Endpoints ---

/// Public endpoint for creating a membership.
pub const ENDPOINT_REGISTER: &str = "/register";
/// Collection of active memberships.
pub const ENDPOINT_MEMBERS: &str = "/members";
/// Same listing with a trailing slash.
pub const ENDPOINT_MEMBERS_SLASH: &str = "/members/";
/// A single membership, addressed by email.
pub const ENDPOINT_MEMBER: &str = "/members/:email";

// --- Response Messages ---

pub const MSG_REGISTERED: &str = "Membership registered successfully.";
pub const MSG_START_DATE_UPDATED: &str = "Membership start date updated successfully.";
pub const MSG_CANCELED: &str = "Membership canceled successfully.";
pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found.";

// --- Data Transfer Objects ---

/// Body of `POST /register`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Body of `PUT /members/:email`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStartDateRequest {
    #[serde(default)]
    pub new_start_date: Option<String>,
}

/// Confirmation returned by every mutating endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberResponse {
    pub message: String,
    pub member: Member,
}

impl MemberResponse {
    pub fn new(message: &str, member: Member) -> Self {
        Self {
            message: message.to_string(),
            member,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
