use crate::domain::models::catalog;
use crate::domain::models::inquiry::InquiryRequest;
use crate::domain::ports::{InquirySubmitter, SubmitDisposition};
use async_trait::async_trait;
use urlencoding::encode;

/// Inbox that receives booking requests in the mail-draft variant.
pub const SUPPORT_ADDRESS: &str = "info@searench.com";

/// Fallback strategy: instead of calling the endpoint, composes a
/// pre-filled mail draft for the user's own mail client. There is no
/// network call, so from the widget's perspective this always succeeds.
pub struct MailtoSubmitter;

impl MailtoSubmitter {
    fn compose(inquiry: &InquiryRequest) -> String {
        let week_lines: Vec<String> = inquiry
            .selected_week
            .split(", ")
            .filter(|label| !label.is_empty())
            .enumerate()
            .map(|(i, label)| {
                match catalog::find_week(label).and_then(|w| w.bookable_price()) {
                    Some(price) => format!("Week {}: {} (${})", i + 1, label, price),
                    None => format!("Week {}: {}", i + 1, label),
                }
            })
            .collect();

        let subject = format!("Booking Request for {}", inquiry.selected_week);
        let body = format!(
            "Name: {}\r\nEmail: {}\r\nPhone: {}\r\nMessage: {}\r\n\r\nBooking Details:\r\n{}\r\nGuests: {}",
            inquiry.name,
            inquiry.email,
            inquiry.phone,
            inquiry.message,
            week_lines.join("\r\n"),
            inquiry.guests
        );

        format!(
            "mailto:{}?subject={}&body={}",
            SUPPORT_ADDRESS,
            encode(&subject),
            encode(&body)
        )
    }
}

#[async_trait]
impl InquirySubmitter for MailtoSubmitter {
    async fn submit(&self, inquiry: &InquiryRequest) -> SubmitDisposition {
        SubmitDisposition::MailDraft {
            mailto_url: Self::compose(inquiry),
        }
    }
}
