use destructure::Destructure;
use error_stack::Report;
use serde_json::{Map, Value};

use crate::entity::{
    text_of, BookAuthor, BookCountry, BookField, BookImageLink, BookLanguage, BookPages,
    BookTitle, BookYear,
};
use crate::KernelError;

/// Partial update. Only the allow-listed fields can appear, values are not required.
#[derive(Debug, Clone, Default, Eq, PartialEq, Destructure)]
pub struct BookPatch {
    author: Option<BookAuthor>,
    country: Option<BookCountry>,
    image_link: Option<BookImageLink>,
    language: Option<BookLanguage>,
    pages: Option<BookPages>,
    title: Option<BookTitle>,
    year: Option<BookYear>,
}

impl BookPatch {
    pub fn try_from_fields(fields: &Map<String, Value>) -> error_stack::Result<Self, KernelError> {
        let mut patch = Self::default();
        for (key, value) in fields {
            let Some(field) = BookField::from_key(key) else {
                return Err(Report::new(KernelError::DisallowedField)
                    .attach_printable(format!("field `{key}` cannot be updated")));
            };
            match field {
                BookField::Author => patch.author = Some(BookAuthor::new(text_of(value))),
                BookField::Country => patch.country = Some(BookCountry::new(text_of(value))),
                BookField::ImageLink => {
                    patch.image_link = Some(BookImageLink::new(text_of(value)))
                }
                BookField::Language => patch.language = Some(BookLanguage::new(text_of(value))),
                BookField::Pages => patch.pages = Some(BookPages::coerce_update(value)),
                BookField::Title => patch.title = Some(BookTitle::new(text_of(value))),
                BookField::Year => patch.year = Some(BookYear::coerce(value)),
            }
        }
        Ok(patch)
    }
}
