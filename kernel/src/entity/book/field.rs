use serde_json::Value;

/// The fields a client may write. `id` is never writable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BookField {
    Author,
    Country,
    ImageLink,
    Language,
    Pages,
    Title,
    Year,
}

impl BookField {
    pub const ALL: [BookField; 7] = [
        BookField::Author,
        BookField::Country,
        BookField::ImageLink,
        BookField::Language,
        BookField::Pages,
        BookField::Title,
        BookField::Year,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BookField::Author => "author",
            BookField::Country => "country",
            BookField::ImageLink => "imageLink",
            BookField::Language => "language",
            BookField::Pages => "pages",
            BookField::Title => "title",
            BookField::Year => "year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Text value of a loosely typed field: strings verbatim, `null` empty,
/// anything else as its JSON text.
pub(in crate::entity) fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::BookField;

    #[test]
    fn keys_round_trip() {
        for field in BookField::ALL {
            assert_eq!(BookField::from_key(field.key()), Some(field));
        }
        assert_eq!(BookField::from_key("id"), None);
        assert_eq!(BookField::from_key("image_link"), None);
    }
}
