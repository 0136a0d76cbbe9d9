use std::convert::Infallible;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{pagination, rejections::AppError};

/// JSON request body whose rejections are mapped onto [`AppError`]:
/// a body that is not JSON at all is a bad request, JSON of the wrong
/// shape is unprocessable.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                tracing::debug!("request body has the wrong shape: {e}");
                Err(AppError::Unprocessable)
            }
            Err(e) => {
                tracing::debug!("request body rejected: {e}");
                Err(AppError::BadRequest)
            }
        }
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// The 1-based `page` query parameter, defaulting to the first page.
pub struct Page(pub usize);

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.page);
        Ok(Page(pagination::parse_page(raw.as_deref())))
    }
}
