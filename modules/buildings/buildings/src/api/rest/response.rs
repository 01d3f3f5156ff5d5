use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};

use super::notice::{Notice, PendingFlash, clear_flash_cookie, flash_cookie};
use super::views::{View, ViewRenderer};

const LIST_ROUTE: &str = "/";

/// What a handler decided to do; turned into an HTTP response by
/// [`Outcome::respond`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Page { view: View, notice: Option<Notice> },
    Redirect { to: &'static str, notice: Notice },
}

impl Outcome {
    #[must_use]
    pub fn page(view: View) -> Self {
        Self::Page { view, notice: None }
    }

    #[must_use]
    pub fn page_with(view: View, notice: Notice) -> Self {
        Self::Page {
            view,
            notice: Some(notice),
        }
    }

    /// Redirect to the list page, flashing `notice` there.
    #[must_use]
    pub fn to_list(notice: Notice) -> Self {
        Self::Redirect {
            to: LIST_ROUTE,
            notice,
        }
    }

    /// Render or redirect. A rendered page shows and clears the pending
    /// flash; a redirect appends its notice to it.
    pub fn respond(self, renderer: &dyn ViewRenderer, pending: PendingFlash) -> Response {
        let had_pending = !pending.is_empty();
        let PendingFlash(mut notices) = pending;
        match self {
            Self::Page { view, notice } => {
                notices.extend(notice);
                let html = Html(renderer.render(&view, &notices));
                if had_pending {
                    ([(SET_COOKIE, clear_flash_cookie())], html).into_response()
                } else {
                    html.into_response()
                }
            }
            Self::Redirect { to, notice } => {
                notices.push(notice);
                ([(SET_COOKIE, flash_cookie(&notices))], Redirect::to(to)).into_response()
            }
        }
    }
}
