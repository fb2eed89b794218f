use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};
use tracing::{debug, error};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Sends the error as `status(code)` with the bare message as a plain text body.
#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.current_context() {
            KernelError::UnauthorizedKey(_)
            | KernelError::MissingFields
            | KernelError::DisallowedField => StatusCode::UNAUTHORIZED,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Storage | KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("{:?}", self.0);
        } else {
            debug!("{:?}", self.0);
        }
        (status, self.0.current_context().to_string()).into_response()
    }
}
