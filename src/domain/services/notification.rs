use tera::{Context, Tera};

use crate::domain::models::inquiry::Inquiry;
use crate::error::AppError;

pub const INQUIRY_SUBJECT: &str = "New Property Rental Inquiry";

/// Renders the HTML and plain-text notification bodies for one inquiry.
/// Both templates share the same context, so recipients all get identical
/// content.
pub fn render_notification(
    templates: &Tera,
    inquiry: &Inquiry,
    spreadsheet_link: &str,
) -> Result<(String, String), AppError> {
    let mut context = Context::new();
    context.insert("name", &inquiry.name);
    context.insert("email", &inquiry.email);
    context.insert("phone", &inquiry.phone);
    context.insert("message", &inquiry.message);
    context.insert("week", &inquiry.week);
    context.insert("guests", &inquiry.guests);
    context.insert("rate", &inquiry.rate);
    context.insert("submitted_at", &inquiry.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string());
    context.insert("spreadsheet_link", spreadsheet_link);

    let html = templates
        .render("inquiry_notification.html", &context)
        .map_err(|e| AppError::Template(format!("HTML body render error: {:?}", e)))?;
    let text = templates
        .render("inquiry_notification.txt", &context)
        .map_err(|e| AppError::Template(format!("Text body render error: {:?}", e)))?;

    Ok((html, text))
}
