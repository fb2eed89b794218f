use serde::{Deserialize, Serialize};
use serde_json::Value;
use vodca::{AsRefln, Fromln};

use crate::entity::coerce_integer;

/// Publication year. Negative values are years BC.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookYear(i32);

impl BookYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    pub fn coerce(value: &Value) -> Self {
        coerce_integer(value)
            .and_then(|year| i32::try_from(year).ok())
            .map_or_else(|| Self(0), Self)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::BookYear;

    #[test]
    fn coerce_falls_back_to_zero() {
        assert_eq!(BookYear::coerce(&json!("1605")), BookYear::new(1605));
        assert_eq!(BookYear::coerce(&json!(-1200)), BookYear::new(-1200));
        assert_eq!(BookYear::coerce(&json!("unknown")), BookYear::new(0));
        assert_eq!(BookYear::coerce(&json!(99999999999i64)), BookYear::new(0));
    }
}
