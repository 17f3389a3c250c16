//! Stateless greeting endpoints and the `/items/` placeholder.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Farewell {
    pub farewell: String,
}

#[derive(Debug, Deserialize)]
pub struct GreetParams {
    #[serde(default = "default_repeat")]
    pub repeat: i64,
}

fn default_repeat() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ItemsParams {
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    10
}

/// Upper bound on the size of a generated greeting, in bytes.
pub const MAX_GREETING_BYTES: usize = 1 << 20;

const CLOSING: &str = "Nice to Meet You";

/// `"Hello, {name}! "` repeated `repeat` times, then the closing phrase.
/// A zero or negative `repeat` drops the salutation entirely. Returns `None`
/// when the text would exceed [`MAX_GREETING_BYTES`]; nothing is allocated
/// in that case.
pub fn greeting_text(name: &str, repeat: i64) -> Option<String> {
    let salutation = format!("Hello, {name}! ");
    let times = usize::try_from(repeat).unwrap_or(0);
    let len = salutation
        .len()
        .checked_mul(times)?
        .checked_add(CLOSING.len())?;
    if len > MAX_GREETING_BYTES {
        return None;
    }
    let mut text = String::with_capacity(len);
    for _ in 0..times {
        text.push_str(&salutation);
    }
    text.push_str(CLOSING);
    Some(text)
}

pub async fn root() -> Json<Message> {
    Json(Message {
        message: "My First API!".to_string(),
    })
}

pub async fn greet(
    Path(name): Path<String>,
    Query(params): Query<GreetParams>,
) -> Result<Json<Greeting>, ApiError> {
    let greeting = greeting_text(&name, params.repeat).ok_or(ApiError::GreetingTooLong {
        repeat: params.repeat,
    })?;
    Ok(Json(Greeting { greeting }))
}

pub async fn farewell(Path(name): Path<String>) -> Json<Farewell> {
    Json(Farewell {
        farewell: format!("Bye, {name}! See You Again"),
    })
}

// Placeholder text only; nothing is sliced.
pub async fn read_items(Query(params): Query<ItemsParams>) -> Json<Message> {
    Json(Message {
        message: format!(
            "I will show you {} items from number {}",
            params.count, params.start
        ),
    })
}
