//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A catalog entry
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: Option<i32>,
}

/// Create/update request body.
///
/// Updates replace every column; a missing `published_year` overwrites
/// any previously stored value with NULL.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: Option<i32>,
}

/// Search query for the public listing endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring match on title
    pub title: Option<String>,
    /// Case-insensitive substring match on author
    pub author: Option<String>,
}
