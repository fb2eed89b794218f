use driver::database::JsonDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }

    pub fn with_database(database: JsonDatabase) -> Self {
        Self(Arc::new(Handler { database }))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: JsonDatabase,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let database = JsonDatabase::new()?;

        Ok(Self { database })
    }
}
