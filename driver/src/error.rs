use error_stack::ResultExt;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Failed to read environment")]
    Env,
    #[error("Failed to access the book store file")]
    Io,
    #[error("Book store is not a valid document")]
    Serde,
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for error_stack::Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.change_context(KernelError::Storage)
    }
}
