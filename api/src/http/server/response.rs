use axum::{Json, http::StatusCode, response::IntoResponse};
use posts_core::domain::common::{PageRef, PaginationWindow};
use serde::Serialize;
use utoipa::ToSchema;

/// Successful response: a status code and a JSON body.
pub struct Response<T> {
    status: StatusCode,
    body: T,
}

impl<T> Response<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }

    pub fn accepted(body: T) -> Self {
        Self {
            status: StatusCode::ACCEPTED,
            body,
        }
    }

    pub fn deleted(body: T) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        // 204 answers carry no body
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }

        (self.status, Json(self.body)).into_response()
    }
}

/// One page of a collection, with references to its neighbours so clients
/// can walk the listing without computing offsets themselves.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub previous: Option<PageRef>,
    pub next: Option<PageRef>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32, window: PaginationWindow) -> Self {
        Self {
            data,
            total,
            page,
            limit,
            previous: window.previous,
            next: window.next,
        }
    }
}
