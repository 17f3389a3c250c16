//! Request handlers, grouped by resource.

pub mod feedback;
pub mod greeting;
pub mod todos;

use axum::{http::Uri, response::Redirect};

/// Sends a slashless collection path to its canonical `/`-terminated form
/// with a 307, so the method, body and query string survive the hop.
pub async fn append_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}
