use driver::env_or;
use error_stack::ResultExt;
use kernel::KernelError;
use std::path::PathBuf;

const PORT: &str = "PORT";
const PUBLIC_DIR: &str = "PUBLIC_DIR";
const LOG_DIR: &str = "LOG_DIR";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment, falling back to a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let port = var(PORT, "8080")?;
        let port = port
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{PORT}={port} is not a valid port"))?;
        Ok(Self {
            port,
            public_dir: var(PUBLIC_DIR, "public")?.into(),
            log_dir: var(LOG_DIR, "./logs/")?.into(),
        })
    }
}

fn var(key: &str, default: &str) -> error_stack::Result<String, KernelError> {
    env_or(key, default).change_context(KernelError::Internal)
}
