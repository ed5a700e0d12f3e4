//! Custom JSON extractor
//!
//! Wraps `axum::Json` so body rejections come back as the same
//! `{ "message": … }` shape as every other error.

use axum::{
    extract::{rejection::JsonRejection as AxumJsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorBody;

/// JSON extractor with uniform rejection bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

/// Rejection carrying the original status and message
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        (
            self.status,
            AxumJson(ApiErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                status: rejection_status(&rejection),
                message: rejection.body_text(),
            }),
        }
    }
}

fn rejection_status(rejection: &AxumJsonRejection) -> StatusCode {
    match rejection {
        AxumJsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AxumJsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
        AxumJsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    }
}
