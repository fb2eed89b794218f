use destructure::Destructure;
use error_stack::Report;
use serde_json::{Map, Value};

use crate::entity::{
    is_truthy, text_of, Book, BookAuthor, BookCountry, BookField, BookId, BookImageLink,
    BookLanguage, BookPages, BookTitle, BookYear,
};
use crate::KernelError;

/// A validated creation payload, waiting for its id.
#[derive(Debug, Clone, Eq, PartialEq, Destructure)]
pub struct BookDraft {
    author: BookAuthor,
    country: BookCountry,
    image_link: BookImageLink,
    language: BookLanguage,
    pages: BookPages,
    title: BookTitle,
    year: BookYear,
}

impl BookDraft {
    pub fn try_from_fields(fields: &Map<String, Value>) -> error_stack::Result<Self, KernelError> {
        let missing = BookField::ALL
            .into_iter()
            .filter(|field| !fields.get(field.key()).is_some_and(is_truthy))
            .map(|field| field.key())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(Report::new(KernelError::MissingFields)
                .attach_printable(format!("missing or empty: {}", missing.join(", "))));
        }

        let text = |field: BookField| fields.get(field.key()).map(text_of).unwrap_or_default();
        let value = |field: BookField| fields.get(field.key()).unwrap_or(&Value::Null);
        Ok(Self {
            author: BookAuthor::new(text(BookField::Author)),
            country: BookCountry::new(text(BookField::Country)),
            image_link: BookImageLink::new(text(BookField::ImageLink)),
            language: BookLanguage::new(text(BookField::Language)),
            pages: BookPages::coerce(value(BookField::Pages)),
            title: BookTitle::new(text(BookField::Title)),
            year: BookYear::coerce(value(BookField::Year)),
        })
    }

    pub fn into_book(self, id: BookId) -> Book {
        let DestructBookDraft {
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        } = self.into_destruct();
        Book::new(
            id, author, country, image_link, language, pages, title, year,
        )
    }
}
