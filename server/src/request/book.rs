use crate::controller::{Intake, TryIntake};
use application::transfer::{CreateBookDto, DeleteBookDto, GetAllBookDto, UpdateBookDto};
use error_stack::Report;
use kernel::prelude::entity::{BookDraft, BookPatch, BookSelection};
use kernel::KernelError;
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct GetAllBookRequest {
    query: Vec<(String, String)>,
}

impl GetAllBookRequest {
    pub fn new(query: Vec<(String, String)>) -> Self {
        Self { query }
    }
}

#[derive(Debug)]
pub struct CreateBookRequest {
    fields: Map<String, Value>,
}

impl CreateBookRequest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[derive(Debug)]
pub struct UpdateBookRequest {
    id: String,
    fields: Map<String, Value>,
}

impl UpdateBookRequest {
    pub fn new(id: String, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl TryIntake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetAllBookRequest) -> Result<Self::To, Self::Error> {
        Ok(GetAllBookDto {
            selection: BookSelection::from_query(&input.query)?,
        })
    }
}

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            draft: BookDraft::try_from_fields(&input.fields)?,
        })
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateBookDto {
            patch: BookPatch::try_from_fields(&input.fields)?,
            id: input.id,
        })
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
