//! Request and response payloads for the API.
//!
//! # Design
//! These mirror the server's schema but are defined independently so the
//! client does not depend on axum. The integration test catches drift
//! between the two crates.

use serde::{Deserialize, Serialize};

/// A single to-do item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a to-do. New items always start incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating a to-do. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub author: String,
    pub message: String,
}

/// Server's echo of an accepted note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteReceipt {
    pub status: String,
    pub author: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookReview {
    pub book_title: String,
    pub reviewer_name: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GreetingBody {
    pub greeting: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FarewellBody {
    pub farewell: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}
