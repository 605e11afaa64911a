//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book
    pub async fn create_book(&self, book: BookPayload) -> AppResult<Book> {
        self.repository.books.insert(&book).await
    }

    /// Replace every field of an existing book
    pub async fn update_book(&self, id: i32, book: BookPayload) -> AppResult<Book> {
        self.repository
            .books
            .update(id, &book)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book by id
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        if !self.repository.books.delete(id).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// List books, optionally filtered by title or author substring
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }
}
