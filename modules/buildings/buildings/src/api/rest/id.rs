use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;

/// `{id}` path segment of the record routes.
///
/// Only plain decimal digits match; a sign, whitespace or anything else is
/// treated as an unknown route and answered with 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingId(pub i64);

impl BuildingId {
    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BuildingId {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        Self::parse(&raw).ok_or(StatusCode::NOT_FOUND)
    }
}
