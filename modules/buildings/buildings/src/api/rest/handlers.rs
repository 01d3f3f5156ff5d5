use std::sync::Arc;

use axum::extract::{Extension, Form};
use axum::response::Response;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::service::Service;

use super::dto::BuildingFormRequest;
use super::error::{ApiError, ApiResult};
use super::id::BuildingId;
use super::notice::{Notice, PendingFlash};
use super::response::Outcome;
use super::views::{View, ViewRenderer};

/// Notice for a user-recoverable error; anything else becomes a 500.
fn recoverable(err: DomainError) -> Result<Notice, ApiError> {
    match Notice::for_error(&err) {
        Some(notice) => {
            info!(error = %err, "Request rejected");
            Ok(notice)
        }
        None => Err(err.into()),
    }
}

pub async fn list_buildings(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
) -> ApiResult<Response> {
    let buildings = svc.list_buildings().await?;
    Ok(Outcome::page(View::Index(buildings)).respond(views.as_ref(), flash))
}

#[allow(clippy::unused_async)]
pub async fn create_form(
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
) -> Response {
    Outcome::page(View::CreateForm).respond(views.as_ref(), flash)
}

pub async fn create_building(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
    Form(req): Form<BuildingFormRequest>,
) -> ApiResult<Response> {
    let outcome = match svc.create_building(&req.into()).await {
        Ok(_) => Outcome::to_list(Notice::Created),
        // Entered values are not echoed back.
        Err(e) => Outcome::page_with(View::CreateForm, recoverable(e)?),
    };
    Ok(outcome.respond(views.as_ref(), flash))
}

pub async fn view_building(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
    BuildingId(id): BuildingId,
) -> ApiResult<Response> {
    let outcome = match svc.get_building(id).await {
        Ok(building) => Outcome::page(View::Detail(building)),
        Err(e) => Outcome::to_list(recoverable(e)?),
    };
    Ok(outcome.respond(views.as_ref(), flash))
}

pub async fn update_form(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
    BuildingId(id): BuildingId,
) -> ApiResult<Response> {
    let outcome = match svc.get_building(id).await {
        Ok(building) => Outcome::page(View::UpdateForm(building)),
        Err(e) => Outcome::to_list(recoverable(e)?),
    };
    Ok(outcome.respond(views.as_ref(), flash))
}

pub async fn update_building(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
    BuildingId(id): BuildingId,
    Form(req): Form<BuildingFormRequest>,
) -> ApiResult<Response> {
    // The form is re-rendered from the record as it was before this attempt.
    let existing = match svc.get_building(id).await {
        Ok(building) => building,
        Err(e) => return Ok(Outcome::to_list(recoverable(e)?).respond(views.as_ref(), flash)),
    };

    let outcome = match svc.update_building(id, &req.into()).await {
        Ok(_) => Outcome::to_list(Notice::Updated),
        Err(e @ DomainError::NotFound { .. }) => Outcome::to_list(recoverable(e)?),
        Err(e) => Outcome::page_with(View::UpdateForm(existing), recoverable(e)?),
    };
    Ok(outcome.respond(views.as_ref(), flash))
}

/// `GET /delete/{id}`: deletes immediately, there is no confirmation step.
pub async fn delete_building(
    Extension(svc): Extension<Arc<Service>>,
    Extension(views): Extension<Arc<dyn ViewRenderer>>,
    flash: PendingFlash,
    BuildingId(id): BuildingId,
) -> ApiResult<Response> {
    let notice = match svc.delete_building(id).await {
        Ok(()) => Notice::Deleted,
        Err(e) => recoverable(e)?,
    };
    Ok(Outcome::to_list(notice).respond(views.as_ref(), flash))
}
