use serde::{Deserialize, Serialize};
use serde_json::Value;
use vodca::{AsRefln, Fromln};

use crate::entity::coerce_integer;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookPages(i32);

impl BookPages {
    pub fn new(pages: impl Into<i32>) -> Self {
        Self(pages.into())
    }

    /// Creation rule: anything that does not read as a positive page count becomes 1.
    pub fn coerce(value: &Value) -> Self {
        Self::read(value, |pages| pages > 0)
    }

    /// Update rule: any readable count of zero or more is kept as sent.
    pub fn coerce_update(value: &Value) -> Self {
        Self::read(value, |pages| pages >= 0)
    }

    fn read(value: &Value, accept: impl Fn(i64) -> bool) -> Self {
        coerce_integer(value)
            .filter(|pages| accept(*pages))
            .and_then(|pages| i32::try_from(pages).ok())
            .map_or_else(|| Self(1), Self)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::BookPages;

    #[test]
    fn coerce_falls_back_to_one() {
        assert_eq!(BookPages::coerce(&json!("209")), BookPages::new(209));
        assert_eq!(BookPages::coerce(&json!(928)), BookPages::new(928));
        assert_eq!(BookPages::coerce(&json!("many")), BookPages::new(1));
        assert_eq!(BookPages::coerce(&json!(0)), BookPages::new(1));
        assert_eq!(BookPages::coerce(&json!(-40)), BookPages::new(1));
        assert_eq!(BookPages::coerce(&json!(null)), BookPages::new(1));
    }

    #[test]
    fn coerce_update_keeps_zero() {
        assert_eq!(BookPages::coerce_update(&json!(0)), BookPages::new(0));
        assert_eq!(BookPages::coerce_update(&json!("0")), BookPages::new(0));
        assert_eq!(BookPages::coerce_update(&json!("352")), BookPages::new(352));
        assert_eq!(BookPages::coerce_update(&json!("many")), BookPages::new(1));
        assert_eq!(BookPages::coerce_update(&json!(-3)), BookPages::new(1));
    }
}
