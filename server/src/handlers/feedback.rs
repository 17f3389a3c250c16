//! Echo endpoints for notes and book reviews. Nothing is stored.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub author: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NoteReceipt {
    pub status: String,
    pub author: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookReview {
    pub book_title: String,
    pub reviewer_name: String,
    pub rating: i64,
}

impl BookReview {
    pub fn acknowledgement(&self) -> String {
        format!(
            "{} gave rate {} to book '{}'. Thank you for the review.",
            self.reviewer_name, self.rating, self.book_title
        )
    }
}

pub async fn create_note(Json(note): Json<Note>) -> Json<NoteReceipt> {
    info!(author = %note.author, message = %note.message, "got a new note");
    Json(NoteReceipt {
        status: "Got a new message successfully".to_string(),
        author: note.author,
        message: note.message,
    })
}

/// Responds with a one-element array holding the acknowledgement.
pub async fn create_review(Json(review): Json<BookReview>) -> Json<Vec<String>> {
    Json(vec![review.acknowledgement()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_acknowledgement_format() {
        let review = BookReview {
            book_title: "Dune".to_string(),
            reviewer_name: "Kim".to_string(),
            rating: 5,
        };
        assert_eq!(
            review.acknowledgement(),
            "Kim gave rate 5 to book 'Dune'. Thank you for the review."
        );
    }

    #[test]
    fn review_rejects_non_integer_rating() {
        let result: Result<BookReview, _> = serde_json::from_str(
            r#"{"book_title":"Dune","reviewer_name":"Kim","rating":"great"}"#,
        );
        assert!(result.is_err());
    }
}
