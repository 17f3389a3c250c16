//! Stateless request builder and response parser for every API endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    BookReview, CreateTodo, ErrorBody, FarewellBody, GreetingBody, MessageBody, Note,
    NoteReceipt, Todo, UpdateTodo,
};

/// Synchronous, stateless client for the API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // --- greetings ---

    pub fn build_root(&self) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.url("/"))
    }

    pub fn parse_root(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: MessageBody = parse_json(&response)?;
        Ok(body.message)
    }

    pub fn build_hello(&self, name: &str, repeat: i64) -> HttpRequest {
        let name = urlencoding::encode(name);
        HttpRequest::bodyless(
            HttpMethod::Get,
            self.url(&format!("/hello/{name}?repeat={repeat}")),
        )
    }

    pub fn parse_hello(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: GreetingBody = parse_json(&response)?;
        Ok(body.greeting)
    }

    pub fn build_bye(&self, name: &str) -> HttpRequest {
        let name = urlencoding::encode(name);
        HttpRequest::bodyless(HttpMethod::Get, self.url(&format!("/bye/{name}")))
    }

    pub fn parse_bye(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: FarewellBody = parse_json(&response)?;
        Ok(body.farewell)
    }

    pub fn build_items(&self, start: i64, count: i64) -> HttpRequest {
        HttpRequest::bodyless(
            HttpMethod::Get,
            self.url(&format!("/items/?start={start}&count={count}")),
        )
    }

    pub fn parse_items(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: MessageBody = parse_json(&response)?;
        Ok(body.message)
    }

    // --- notes and reviews ---

    pub fn build_create_note(&self, note: &Note) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(HttpMethod::Post, self.url("/notes/"), to_json(note)?))
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<NoteReceipt, ApiError> {
        parse_json(&response)
    }

    pub fn build_create_review(&self, review: &BookReview) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(HttpMethod::Post, self.url("/reviews/"), to_json(review)?))
    }

    /// The server answers with a one-element array; the element is returned.
    pub fn parse_create_review(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: Vec<String> = parse_json(&response)?;
        body.into_iter().next().ok_or_else(|| {
            ApiError::DeserializationError("empty review acknowledgement".to_string())
        })
    }

    // --- to-dos ---

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.url("/todos/"))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.url(&format!("/todos/{id}")))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(HttpMethod::Post, self.url("/todos/"), to_json(input)?))
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Put,
            self.url(&format!("/todos/{id}")),
            to_json(input)?,
        ))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Delete, self.url(&format!("/todos/{id}")))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(&response)
    }

    /// Returns the server's confirmation message.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: MessageBody = parse_json(&response)?;
        Ok(body.message)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Every endpoint answers 200 on success.
fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        404 => {
            // fall back to the raw body if the envelope is missing
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.detail)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::NotFound { detail })
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
