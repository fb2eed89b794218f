use kernel::prelude::entity::{Book, BookDraft, BookPatch, BookSelection, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub author: String,
    pub country: String,
    pub image_link: String,
    pub language: String,
    pub pages: i32,
    pub title: String,
    pub year: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        } = value.into_destruct();
        Self {
            id: id.into(),
            author: author.into(),
            country: country.into(),
            image_link: image_link.into(),
            language: language.into(),
            pages: pages.into(),
            title: title.into(),
            year: year.into(),
        }
    }
}

pub struct GetAllBookDto {
    pub selection: BookSelection,
}

pub struct CreateBookDto {
    pub draft: BookDraft,
}

pub struct UpdateBookDto {
    pub id: String,
    pub patch: BookPatch,
}

pub struct DeleteBookDto {
    pub id: String,
}
