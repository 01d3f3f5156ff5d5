//! User-facing notifications and the one-shot `flash` cookie that carries
//! them across redirects.
//!
//! Only notice codes travel in the cookie; the text is always taken from
//! [`Notice::message`], so a forged cookie can select a message but never
//! inject one. Notices queue up across consecutive redirects until a page is
//! rendered, keeping at most [`MAX_PENDING`] of the most recent.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::domain::error::DomainError;

pub const FLASH_COOKIE: &str = "flash";

/// Upper bound on queued notices, so the cookie stays small for clients
/// that never follow redirects.
pub const MAX_PENDING: usize = 8;

const CODE_SEPARATOR: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    NotFound,
    MissingField,
    DuplicateKey,
    InvalidNumber,
}

impl Notice {
    const ALL: [Self; 7] = [
        Self::Created,
        Self::Updated,
        Self::Deleted,
        Self::NotFound,
        Self::MissingField,
        Self::DuplicateKey,
        Self::InvalidNumber,
    ];

    #[must_use]
    pub fn kind(self) -> NoticeKind {
        match self {
            Self::Created | Self::Updated | Self::Deleted => NoticeKind::Success,
            Self::NotFound | Self::MissingField | Self::DuplicateKey | Self::InvalidNumber => {
                NoticeKind::Error
            }
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Created => "Building created successfully",
            Self::Updated => "Building updated successfully",
            Self::Deleted => "Building deleted successfully!",
            Self::NotFound => "Building not found!",
            Self::MissingField => "All fields are required",
            Self::DuplicateKey => "Building code already exists",
            Self::InvalidNumber => "Floors and Year Built must be valid numbers",
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::MissingField => "missing_field",
            Self::DuplicateKey => "duplicate_key",
            Self::InvalidNumber => "invalid_number",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }

    /// Notice for a user-recoverable error; `None` for storage failures.
    #[must_use]
    pub fn for_error(err: &DomainError) -> Option<Self> {
        match err {
            DomainError::MissingField { .. } => Some(Self::MissingField),
            DomainError::InvalidNumber { .. } => Some(Self::InvalidNumber),
            DomainError::DuplicateKey { .. } => Some(Self::DuplicateKey),
            DomainError::NotFound { .. } => Some(Self::NotFound),
            DomainError::Database(_) => None,
        }
    }
}

/// `Set-Cookie` value that stores `notices` for the next rendered page.
/// Only the last [`MAX_PENDING`] are kept.
#[must_use]
pub fn flash_cookie(notices: &[Notice]) -> String {
    let skip = notices.len().saturating_sub(MAX_PENDING);
    let codes: Vec<&str> = notices.iter().skip(skip).copied().map(Notice::code).collect();
    format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        codes.join(CODE_SEPARATOR)
    )
}

/// `Set-Cookie` value that removes a consumed flash.
#[must_use]
pub fn clear_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Notices left by previous responses and not shown yet, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingFlash(pub Vec<Notice>);

impl PendingFlash {
    fn from_cookie_header(header: &str) -> Option<Vec<Notice>> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| {
                value
                    .split(CODE_SEPARATOR)
                    .filter_map(Notice::from_code)
                    .take(MAX_PENDING)
                    .collect()
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PendingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let notices = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(Self::from_cookie_header)
            .unwrap_or_default();
        Ok(Self(notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_every_code_round_trips() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn test_error_mapping_matches_messages() {
        let cases = [
            (DomainError::missing_field("name"), "All fields are required"),
            (DomainError::duplicate_key("B1"), "Building code already exists"),
            (
                DomainError::invalid_number("floors"),
                "Floors and Year Built must be valid numbers",
            ),
            (DomainError::not_found(1), "Building not found!"),
        ];
        for (err, message) in cases {
            let notice = Notice::for_error(&err).unwrap();
            assert_eq!(notice.message(), message);
            assert_eq!(notice.kind(), NoticeKind::Error);
        }
        assert_eq!(
            Notice::for_error(&DomainError::Database(anyhow::anyhow!("io"))),
            None
        );
    }

    #[test]
    fn test_success_notices_are_distinct() {
        let messages = [Notice::Created, Notice::Updated, Notice::Deleted].map(Notice::message);
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
        assert_eq!(Notice::Deleted.kind(), NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_pending_flash_reads_cookie_among_others() {
        let (mut parts, ()) = Request::builder()
            .header(COOKIE, "theme=dark; flash=updated; lang=en")
            .body(())
            .unwrap()
            .into_parts();

        let PendingFlash(notices) = PendingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(notices, vec![Notice::Updated]);
    }

    #[tokio::test]
    async fn test_pending_flash_ignores_unknown_code() {
        let (mut parts, ()) = Request::builder()
            .header(COOKIE, "flash=whatever")
            .body(())
            .unwrap()
            .into_parts();

        let flash = PendingFlash::from_request_parts(&mut parts, &()).await.unwrap();

        assert!(flash.is_empty());
    }

    #[test]
    fn test_flash_cookie_values() {
        assert_eq!(
            flash_cookie(&[Notice::Created]),
            "flash=created; Path=/; HttpOnly; SameSite=Lax"
        );
        assert_eq!(
            flash_cookie(&[Notice::NotFound, Notice::Deleted]),
            "flash=not_found.deleted; Path=/; HttpOnly; SameSite=Lax"
        );
        assert!(clear_flash_cookie().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_pending_flash_reads_queued_codes_in_order() {
        let (mut parts, ()) = Request::builder()
            .header(COOKIE, "flash=not_found.bogus.deleted")
            .body(())
            .unwrap()
            .into_parts();

        let PendingFlash(notices) = PendingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(notices, vec![Notice::NotFound, Notice::Deleted]);
    }

    #[test]
    fn test_flash_cookie_keeps_most_recent_notices() {
        let mut notices = vec![Notice::Created; MAX_PENDING];
        notices.push(Notice::Deleted);

        let cookie = flash_cookie(&notices);

        assert!(cookie.starts_with("flash=created."));
        assert!(cookie.contains(".deleted;"));
        assert_eq!(cookie.matches("created").count(), MAX_PENDING - 1);
    }
}
