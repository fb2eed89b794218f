use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KernelError {
    UnauthorizedKey(String),
    MissingFields,
    DisallowedField,
    NotFound,
    Storage,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::UnauthorizedKey(key) => write!(f, "{key} is not allowed"),
            KernelError::MissingFields => write!(f, "Missing body info"),
            KernelError::DisallowedField => write!(f, "Update field not allowed"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::Storage => write!(f, "Book store unavailable"),
            KernelError::Internal => write!(f, "Internal server error"),
        }
    }
}

impl Context for KernelError {}
