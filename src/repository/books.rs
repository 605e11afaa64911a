//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery},
};

/// Escape LIKE metacharacters so user input only ever matches literally.
/// Postgres uses backslash as the default LIKE escape character.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book row. Duplicate ISBNs surface as a conflict.
    pub async fn insert(&self, book: &BookPayload) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, published_year)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, isbn, published_year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_year)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_db)?;

        Ok(created)
    }

    /// Full-replace update of every column. Returns None when no row has
    /// the given id.
    pub async fn update(&self, id: i32, book: &BookPayload) -> AppResult<Option<Book>> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, isbn = $3, published_year = $4
            WHERE id = $5
            RETURNING id, title, author, isbn, published_year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.published_year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_db)?;

        Ok(updated)
    }

    /// Delete by id, reporting whether a row existed.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Search books by substring filter.
    ///
    /// At most one filter applies: title takes precedence over author when
    /// both are supplied.
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let books = if let Some(ref title) = query.title {
            sqlx::query_as::<_, Book>(
                "SELECT id, title, author, isbn, published_year FROM books \
                 WHERE title ILIKE $1 ORDER BY id",
            )
            .bind(format!("%{}%", escape_like(title)))
            .fetch_all(&self.pool)
            .await?
        } else if let Some(ref author) = query.author {
            sqlx::query_as::<_, Book>(
                "SELECT id, title, author, isbn, published_year FROM books \
                 WHERE author ILIKE $1 ORDER BY id",
            )
            .bind(format!("%{}%", escape_like(author)))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Book>(
                "SELECT id, title, author, isbn, published_year FROM books ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await?
        };

        Ok(books)
    }
}
