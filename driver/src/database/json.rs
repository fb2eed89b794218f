use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::warn;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

use crate::env_or;
use crate::error::ConvertError;

pub use self::book::*;

mod book;

const BOOKS_DB_PATH: &str = "BOOKS_DB_PATH";
const DEFAULT_DB_PATH: &str = "db.json";

/// A single JSON file holding the whole collection.
///
/// Every transaction holds the file lock until it is committed or dropped, so
/// one load/persist cycle never interleaves with another one in this process.
#[derive(Clone)]
pub struct JsonDatabase {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl JsonDatabase {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let path = env_or(BOOKS_DB_PATH, DEFAULT_DB_PATH).convert_error()?;
        let db = Self::open(path);
        if !db.path().exists() {
            warn!(
                "Book store {} does not exist yet, requests will fail until it is created",
                db.path().display()
            );
        }
        Ok(db)
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for JsonDatabase {
    type Transaction = JsonTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.lock).lock_owned().await;
        Ok(JsonTransaction {
            path: Arc::clone(&self.path),
            _guard: guard,
        })
    }
}

impl DependOnBookQuery for JsonDatabase {
    type BookQuery = JsonBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &JsonBookRepository
    }
}

impl DependOnBookModifier for JsonDatabase {
    type BookModifier = JsonBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &JsonBookRepository
    }
}

pub struct JsonTransaction {
    path: Arc<PathBuf>,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait::async_trait]
impl Transaction for JsonTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl Deref for JsonTransaction {
    type Target = Path;
    fn deref(&self) -> &Self::Target {
        &self.path
    }
}
