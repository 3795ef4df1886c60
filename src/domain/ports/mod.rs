use crate::domain::models::inquiry::{Inquiry, InquiryRequest};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends one inquiry row to the external tabular store. Append-only;
    /// the store is the system of record and is reconciled manually.
    async fn append_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), AppError>;
}

/// What one submission attempt looked like from the widget's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// The endpoint accepted the inquiry.
    Delivered { message: String },
    /// Fallback variant: a pre-composed mail draft should be opened. The
    /// mail client's own outcome is unobservable, so this always counts
    /// as success.
    MailDraft { mailto_url: String },
    /// The endpoint rejected the inquiry or could not be reached.
    Rejected { message: String },
}

/// Strategy for delivering an inquiry, chosen when the widget is built.
#[async_trait]
pub trait InquirySubmitter: Send + Sync {
    async fn submit(&self, inquiry: &InquiryRequest) -> SubmitDisposition;
}
