//! Data models for Bookshelf entities

pub mod book;
pub mod user;
