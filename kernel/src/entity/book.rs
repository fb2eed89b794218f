mod author;
mod country;
mod document;
mod draft;
mod field;
mod filter;
mod id;
mod image_link;
mod language;
mod pages;
mod patch;
mod title;
mod year;

pub use self::{
    author::*, country::*, document::*, draft::*, field::*, filter::*, id::*, image_link::*,
    language::*, pages::*, patch::*, title::*, year::*,
};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    author: BookAuthor,
    country: BookCountry,
    #[serde(rename = "imageLink")]
    image_link: BookImageLink,
    language: BookLanguage,
    pages: BookPages,
    title: BookTitle,
    year: BookYear,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        author: BookAuthor,
        country: BookCountry,
        image_link: BookImageLink,
        language: BookLanguage,
        pages: BookPages,
        title: BookTitle,
        year: BookYear,
    ) -> Self {
        Self {
            id,
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        }
    }

    /// Shallow merge: every field present in the patch overwrites, the rest
    /// (and always the id) stays.
    pub fn merge(&mut self, patch: BookPatch) {
        let DestructBookPatch {
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        } = patch.into_destruct();
        self.substitute(|book| {
            if let Some(author) = author {
                *book.author = author;
            }
            if let Some(country) = country {
                *book.country = country;
            }
            if let Some(image_link) = image_link {
                *book.image_link = image_link;
            }
            if let Some(language) = language {
                *book.language = language;
            }
            if let Some(pages) = pages {
                *book.pages = pages;
            }
            if let Some(title) = title {
                *book.title = title;
            }
            if let Some(year) = year {
                *book.year = year;
            }
        })
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{
        Book, BookAuthor, BookCountry, BookId, BookImageLink, BookLanguage, BookPages, BookPatch,
        BookTitle, BookYear,
    };

    fn quixote() -> Book {
        Book::new(
            BookId::new("0a1b2c3d"),
            BookAuthor::new("Miguel de Cervantes"),
            BookCountry::new("Spain"),
            BookImageLink::new("images/don-quijote-de-la-mancha.jpg"),
            BookLanguage::new("Spanish"),
            BookPages::new(1056),
            BookTitle::new("Don Quixote"),
            BookYear::new(1610),
        )
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(quixote()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "0a1b2c3d",
                "author": "Miguel de Cervantes",
                "country": "Spain",
                "imageLink": "images/don-quijote-de-la-mancha.jpg",
                "language": "Spanish",
                "pages": 1056,
                "title": "Don Quixote",
                "year": 1610
            })
        );
        let back: Book = serde_json::from_value(value).unwrap();
        assert_eq!(back, quixote());
    }

    #[test]
    fn merge_overwrites_only_patched_fields() {
        let fields = json!({ "title": "Don Quijote", "pages": "1072" });
        let patch = BookPatch::try_from_fields(fields.as_object().unwrap()).unwrap();

        let mut book = quixote();
        book.merge(patch);

        assert_eq!(book.id(), &BookId::new("0a1b2c3d"));
        assert_eq!(book.title(), &BookTitle::new("Don Quijote"));
        assert_eq!(book.pages(), &BookPages::new(1072));
        assert_eq!(book.author(), quixote().author());
        assert_eq!(book.year(), quixote().year());
    }
}
