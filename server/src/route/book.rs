use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookPayload, BookTransformer, CreateBookRequest, DeleteBookRequest, GetAllBookRequest,
    UpdateBookRequest,
};
use crate::response::BookPresenter;
use crate::route::path_not_found;
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, UpdateBookService,
};
use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::Router;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>,
                 Query(query): Query<Vec<(String, String)>>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(GetAllBookRequest::new(query))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.database().get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, BookPayload(fields): BookPayload| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(CreateBookRequest::new(fields))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.database().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .fallback(path_not_found),
        )
        .route(
            "/books/:book_id",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 BookPayload(fields): BookPayload| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(UpdateBookRequest::new(id, fields))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.database().update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .fallback(path_not_found),
        )
    }
}
