//! Saved records handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::SavedRecord;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::RecordForm;

/// Where every write redirects to.
pub const RECORDS_PATH: &str = "/myRecords";

#[derive(Template, WebTemplate)]
#[template(path = "myRecords.html")]
pub struct MyRecordsTemplate {
    pub data: Vec<SavedRecord>,
}

/// Detail page; `data` is `None` when the id is unknown and the page renders empty.
#[derive(Template, WebTemplate)]
#[template(path = "myRecordsDetails.html")]
pub struct RecordDetailsTemplate {
    pub data: Option<SavedRecord>,
}

/// `302 Found` to the records list.
fn redirect_to_records() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, RECORDS_PATH)]).into_response()
}

/// Saves the submitted record.
///
/// # Endpoint
///
/// `POST /myRecords` (url-encoded form)
///
/// # Errors
///
/// Returns 500 with the error text if the body cannot be stored or the insert fails.
pub async fn add_record_handler(
    State(state): State<AppState>,
    form: Result<Form<RecordForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|e| AppError::Insert(e.into()))?;

    state
        .record_service
        .add_record(form.into())
        .await
        .map_err(AppError::Insert)?;

    Ok(redirect_to_records())
}

/// Lists all saved records.
///
/// # Endpoint
///
/// `GET /myRecords`
pub async fn my_records_handler(
    State(state): State<AppState>,
) -> Result<MyRecordsTemplate, AppError> {
    let data = state
        .record_service
        .list_records()
        .await
        .map_err(AppError::Read)?;

    Ok(MyRecordsTemplate { data })
}

/// Shows one saved record.
///
/// # Endpoint
///
/// `GET /recordsDetails/{id}`
///
/// An unknown id still renders `200 OK` with an empty page; a non-numeric id is a 500.
pub async fn record_details_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<RecordDetailsTemplate, AppError> {
    let Path(id) = id.map_err(|e| AppError::Read(e.into()))?;

    let data = state
        .record_service
        .get_record(id)
        .await
        .map_err(AppError::Read)?;

    Ok(RecordDetailsTemplate { data })
}

/// Deletes one saved record and returns to the list.
///
/// # Endpoint
///
/// `DELETE /recordsDetails/{id}` (usually `POST` with `_method=DELETE`)
pub async fn delete_record_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(|e| AppError::Delete(e.into()))?;

    state
        .record_service
        .delete_record(id)
        .await
        .map_err(AppError::Delete)?;

    Ok(redirect_to_records())
}
