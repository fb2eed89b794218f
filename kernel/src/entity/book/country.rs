use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookCountry(String);

impl BookCountry {
    pub fn new(country: impl Into<String>) -> Self {
        Self(country.into())
    }
}
