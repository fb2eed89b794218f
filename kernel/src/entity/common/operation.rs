use vodca::{AsRefln, Fromln};

use crate::entity::coerce_integer_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct SelectLimit(usize);

impl SelectLimit {
    pub fn new(value: impl Into<usize>) -> Self {
        SelectLimit(value.into())
    }

    /// Missing, non-numeric, or non-positive input falls back to the default.
    pub fn from_query(raw: Option<&str>) -> Self {
        positive(raw).map_or_else(Self::default, Self)
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(10usize)
    }
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct SelectPage(usize);

impl SelectPage {
    pub fn new(value: impl Into<usize>) -> Self {
        SelectPage(value.into())
    }

    pub fn from_query(raw: Option<&str>) -> Self {
        positive(raw).map_or_else(Self::default, Self)
    }

    pub fn offset(&self, limit: &SelectLimit) -> usize {
        limit.0.saturating_mul(self.0.saturating_sub(1))
    }
}

impl Default for SelectPage {
    fn default() -> Self {
        Self::new(1usize)
    }
}

fn positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(coerce_integer_str)
        .filter(|value| *value > 0)
        .and_then(|value| usize::try_from(value).ok())
}
