use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Opaque short hex token, fixed once the book exists.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 4 random bytes as 8 lowercase hex characters. Collisions are not checked.
    pub fn generate() -> Self {
        let bytes: [u8; 4] = rand::random();
        Self(bytes.iter().map(|byte| format!("{byte:02x}")).collect())
    }
}
