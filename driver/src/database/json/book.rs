use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::BookDocument;
use kernel::KernelError;

use crate::database::JsonTransaction;
use crate::error::{ConvertError, DriverError};

pub struct JsonBookRepository;

#[async_trait::async_trait]
impl BookQuery for JsonBookRepository {
    type Transaction = JsonTransaction;
    async fn load(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<BookDocument, KernelError> {
        JsonBookInternal::load(con).await.convert_error()
    }
}

#[async_trait::async_trait]
impl BookModifier for JsonBookRepository {
    type Transaction = JsonTransaction;
    async fn persist(
        &self,
        con: &mut Self::Transaction,
        document: &BookDocument,
    ) -> error_stack::Result<(), KernelError> {
        JsonBookInternal::persist(con, document)
            .await
            .convert_error()
    }
}

pub(in crate::database) struct JsonBookInternal;

impl JsonBookInternal {
    async fn load(path: &Path) -> error_stack::Result<BookDocument, DriverError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .change_context(DriverError::Io)
            .attach_printable_lazy(|| format!("Failed to read {}", path.display()))?;
        let document: BookDocument = serde_json::from_str(&text)
            .change_context(DriverError::Serde)
            .attach_printable_lazy(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded {} books from {}", document.books().len(), path.display());
        Ok(document)
    }

    /// Writes and syncs next to the store first, then renames over it, so
    /// readers never see a half written file.
    async fn persist(path: &Path, document: &BookDocument) -> error_stack::Result<(), DriverError> {
        let bytes = serde_json::to_vec(document).change_context(DriverError::Serde)?;
        let staging = staging_path(path);
        Self::write_synced(&staging, &bytes)
            .await
            .change_context(DriverError::Io)
            .attach_printable_lazy(|| format!("Failed to write {}", staging.display()))?;
        if let Err(e) = tokio::fs::rename(&staging, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                warn!("Failed to remove {}: {cleanup}", staging.display());
            }
            return Err(Report::new(e)
                .change_context(DriverError::Io)
                .attach_printable(format!("Failed to replace {}", path.display())));
        }
        debug!("Persisted {} books to {}", document.books().len(), path.display());
        Ok(())
    }

    async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("db.json"))
        .to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
