use serde::{Deserialize, Serialize};

use crate::entity::{Book, BookId};

/// The whole persisted collection. Insertion order is kept.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    books: Vec<Book>,
}

impl BookDocument {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find_mut(&mut self, id: &BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id() == id)
    }

    /// Removes the book, keeping the relative order of the others.
    pub fn remove(&mut self, id: &BookId) -> Option<Book> {
        let position = self.books.iter().position(|book| book.id() == id)?;
        Some(self.books.remove(position))
    }
}
