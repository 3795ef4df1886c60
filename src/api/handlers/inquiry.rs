use axum::{extract::State, response::IntoResponse, Form, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::SubmitFormRequest;
use crate::api::dtos::responses::SubmitFormResponse;
use crate::domain::models::inquiry::{Inquiry, NewInquiryParams};
use crate::domain::services::notification::{render_notification, INQUIRY_SUBJECT};
use crate::error::AppError;
use crate::state::AppState;

/// Forwards one inquiry to the record store and notifies the configured
/// recipients. The two external calls are not transactional: a failed
/// email after a successful append leaves the row in place, and the whole
/// request is still reported as failed.
pub async fn submit_inquiry(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<SubmitFormRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("submit_inquiry: Starting for {}", payload.email);

    let inquiry = Inquiry::new(NewInquiryParams {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
        week: payload.selected_week,
        guests: payload.guests,
        rate: payload.selected_price,
    });

    state.record_store.append_inquiry(&inquiry).await?;
    info!("submit_inquiry: Row appended for week '{}'", inquiry.week);

    if !state.config.notify_recipients.is_empty() {
        let (html_body, text_body) =
            render_notification(&state.templates, &inquiry, &state.config.spreadsheet_link())?;

        // Sequential on purpose: a dispatch failure aborts the rest and
        // fails the whole request.
        for recipient in &state.config.notify_recipients {
            state
                .email_service
                .send(recipient, INQUIRY_SUBJECT, &html_body, &text_body)
                .await?;
            info!("submit_inquiry: Notification sent to {}", recipient);
        }
    }

    Ok(Json(SubmitFormResponse {
        success: true,
        message: "Form submitted successfully!".to_string(),
    }))
}
