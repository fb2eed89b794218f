use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: String,
    author: String,
    country: String,
    #[serde(rename = "imageLink")]
    image_link: String,
    language: String,
    pages: i32,
    title: String,
    year: i32,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        } = value;
        Self {
            id,
            author,
            country,
            image_link,
            language,
            pages,
            title,
            year,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// Serializes as `{}`.
#[derive(Debug, Serialize)]
pub struct DeletedBookResponse {}

impl IntoResponse for DeletedBookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<()> for BookPresenter {
    type To = DeletedBookResponse;
    fn emit(&self, _: ()) -> Self::To {
        DeletedBookResponse {}
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
