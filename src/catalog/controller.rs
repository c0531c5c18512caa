use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, uri::PathAndQuery, HeaderMap, Request, StatusCode, Uri},
    middleware::{self, Next},
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use crate::books::dto::BookBody;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, server_error, ServerError};
use crate::utils::logs::log_request;

pub const API_VERSION: &str = "1.0.0";

// Unknown paths and unsupported methods on known paths both end up in route_not_found.
// The outer router only rewrites the path, routing happens in the inner one.
pub fn routes(state: AppState) -> Router {
    let books = Router::new()
        .route("/", get(api_info).fallback(route_not_found))
        .route("/books",
               get(list_books).post(add_book).fallback(route_not_found))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book).fallback(route_not_found))
        .fallback(route_not_found)
        .with_state(state);
    Router::new()
        .fallback_service(books)
        .layer(middleware::from_fn(normalize_path))
        .layer(middleware::from_fn(log_request))
}

/// Route matching ignores the case of the `books` segment and a single trailing slash,
/// so `/BOOKS/` reaches the same handler as `/books`. Returns `None` when the path is
/// already in canonical form.
pub fn normalize_route_path(path: &str) -> Option<String> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let normalized = match trimmed.strip_prefix('/') {
        Some(rest) => {
            let (first, tail) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
            if first.eq_ignore_ascii_case("books") {
                format!("/books{}", tail)
            } else {
                trimmed.to_string()
            }
        }
        None => trimmed.to_string(),
    };
    if normalized == path { None } else { Some(normalized) }
}

async fn normalize_path<B>(mut req: Request<B>, next: Next<B>) -> Response {
    if let Some(path) = normalize_route_path(req.uri().path()) {
        let path_and_query = match req.uri().query() {
            Some(query) => format!("{}?{}", path, query),
            None => path,
        };
        let mut parts = req.uri().clone().into_parts();
        if let Ok(path_and_query) = PathAndQuery::try_from(path_and_query) {
            parts.path_and_query = Some(path_and_query);
            if let Ok(uri) = Uri::from_parts(parts) {
                *req.uri_mut() = uri;
            }
        }
    }
    next.run(req).await
}

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.books.clone())
}

fn book_body(headers: &HeaderMap, body: &Bytes) -> BookBody {
    BookBody::new(headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()), body)
}

pub async fn api_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Books REST API",
        "version": API_VERSION,
        "endpoints": {
            "GET /books": "Get all books",
            "GET /books/:id": "Get a specific book by ID",
            "POST /books": "Create a new book",
            "PUT /books/:id": "Update a book by ID",
            "DELETE /books/:id": "Delete a book by ID"
        }
    }))
}

pub async fn route_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({
        "success": false,
        "message": "Route not found",
        "availableRoutes": {
            "GET /": "API information",
            "GET /books": "Get all books",
            "GET /books/:id": "Get a specific book",
            "POST /books": "Create a new book",
            "PUT /books/:id": "Update a book",
            "DELETE /books/:id": "Delete a book"
        }
    })))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new())
        .await.map_err(server_error(&state.config))?;
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await.map_err(server_error(&state.config))?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req = AddBookCommandRequest::new(book_body(&headers, &body));
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await.map_err(server_error(&state.config))?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    headers: HeaderMap,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req = UpdateBookCommandRequest::new(book_id.as_str(), book_body(&headers, &body));
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await.map_err(server_error(&state.config))?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await.map_err(server_error(&state.config))?;
    Ok(Json(res))
}
