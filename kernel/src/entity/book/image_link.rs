use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookImageLink(String);

impl BookImageLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }
}
