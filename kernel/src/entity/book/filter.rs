use destructure::Destructure;
use error_stack::Report;

use crate::entity::{Book, SelectLimit, SelectPage};
use crate::KernelError;

const PAGE: &str = "page";
const LIMIT: &str = "limit";

/// Fields that can be matched with `GET /books?<key>=<value>`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FilterKey {
    Author,
    Country,
    Language,
    Title,
}

impl FilterKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "author" => Some(FilterKey::Author),
            "country" => Some(FilterKey::Country),
            "language" => Some(FilterKey::Language),
            "title" => Some(FilterKey::Title),
            _ => None,
        }
    }

    fn value_of<'a>(&self, book: &'a Book) -> &'a String {
        match self {
            FilterKey::Author => book.author().as_ref(),
            FilterKey::Country => book.country().as_ref(),
            FilterKey::Language => book.language().as_ref(),
            FilterKey::Title => book.title().as_ref(),
        }
    }
}

/// Conjunction of exact equality conditions.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookFilter {
    conditions: Vec<(FilterKey, String)>,
}

impl BookFilter {
    pub fn new(conditions: Vec<(FilterKey, String)>) -> Self {
        Self { conditions }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.conditions
            .iter()
            .all(|(key, expected)| key.value_of(book) == expected)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Destructure)]
pub struct BookSelection {
    filter: BookFilter,
    page: SelectPage,
    limit: SelectLimit,
}

impl BookSelection {
    pub fn new(filter: BookFilter, page: SelectPage, limit: SelectLimit) -> Self {
        Self {
            filter,
            page,
            limit,
        }
    }

    /// Reads raw query pairs in arrival order. Any key outside the allow-list
    /// rejects the whole query before a single condition is built.
    pub fn from_query(pairs: &[(String, String)]) -> error_stack::Result<Self, KernelError> {
        if let Some((key, _)) = pairs
            .iter()
            .find(|(key, _)| key != PAGE && key != LIMIT && FilterKey::from_key(key).is_none())
        {
            return Err(Report::new(KernelError::UnauthorizedKey(key.clone())));
        }

        let raw = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };
        let page = SelectPage::from_query(raw(PAGE));
        let limit = SelectLimit::from_query(raw(LIMIT));

        let conditions = pairs
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(key, value)| FilterKey::from_key(key).map(|key| (key, value.clone())))
            .collect();

        Ok(Self::new(BookFilter::new(conditions), page, limit))
    }
}
