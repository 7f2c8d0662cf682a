use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use orc_engine::error::AppError;
use orc_engine::export::mail::{self, EmailRequest, MailError, ReportContent};
use orc_engine::export::{attachment_file_name, render_csv, AttachmentKind, ReportReference};
use orc_engine::orc::{
    self, catalog, CropClass, CropRecord, CropType, FormulaKind, LineItem, OrcResult,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalculateResponse {
    pub(crate) crop_type_label: String,
    pub(crate) result: OrcResult,
    pub(crate) line_items: Vec<LineItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CropView {
    pub(crate) name: &'static str,
    pub(crate) crop_type: CropType,
    pub(crate) formula: FormulaKind,
    pub(crate) class: CropClass,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct EmailPayload {
    pub(crate) email: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) csv_content: Option<String>,
    pub(crate) pdf_data: Option<String>,
}

impl EmailPayload {
    /// The rendered document wins over the CSV when both are supplied.
    fn content(&mut self) -> Option<ReportContent> {
        let non_empty = |value: Option<String>| value.filter(|value| !value.trim().is_empty());

        non_empty(self.pdf_data.take())
            .map(ReportContent::PdfBase64)
            .or_else(|| non_empty(self.csv_content.take()).map(ReportContent::Csv))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmailResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
    pub(crate) message_id: Option<String>,
}

pub(crate) fn orc_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/orc/calculate", post(calculate_endpoint))
        .route("/api/v1/orc/report", post(report_endpoint))
        .route("/api/v1/orc/crops", get(crops_endpoint))
        .route("/api/v1/orc/email", post(email_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn calculate_endpoint(Json(record): Json<CropRecord>) -> Json<CalculateResponse> {
    let result = orc::calculate_orc(&record);
    let line_items = result.line_items();

    Json(CalculateResponse {
        crop_type_label: record.crop_type_label(),
        result,
        line_items,
    })
}

pub(crate) async fn report_endpoint(
    Json(record): Json<CropRecord>,
) -> Result<impl IntoResponse, AppError> {
    let result = orc::calculate_orc(&record);
    let reference = ReportReference::at(Utc::now());
    let body = render_csv(&record, &result, &reference)?;
    let file_name = attachment_file_name(reference.issued_on, AttachmentKind::Csv);

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                format!("{}; charset=utf-8", AttachmentKind::Csv.content_type()),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

pub(crate) async fn crops_endpoint() -> Json<Vec<CropView>> {
    let crops = catalog::entries()
        .iter()
        .map(|entry| CropView {
            name: entry.name,
            crop_type: entry.crop_type(),
            formula: entry.formula(),
            class: entry.class,
        })
        .collect();

    Json(crops)
}

pub(crate) async fn email_endpoint(
    Extension(state): Extension<AppState>,
    Json(mut payload): Json<EmailPayload>,
) -> Result<Json<EmailResponse>, AppError> {
    let content = payload.content().ok_or(MailError::MissingContent)?;
    let recipient = payload
        .email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .ok_or(MailError::MissingContent)?;

    let request = EmailRequest::new(
        recipient,
        payload.subject.as_deref(),
        content,
        &state.mail,
    )?;
    let receipt = mail::send(state.mailer.as_ref(), &request)?;

    Ok(Json(EmailResponse {
        success: true,
        message: format!("Email sent successfully to {}", request.recipient),
        message_id: receipt.message_id,
    }))
}
