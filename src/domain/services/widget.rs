use std::collections::VecDeque;
use std::sync::Arc;

use crate::domain::models::inquiry::InquiryRequest;
use crate::domain::ports::{InquirySubmitter, SubmitDisposition};
use crate::domain::services::selection::{GuestCount, PriceSummary, WeekSelection};

/// Delay the view layer should wait before scrolling, so layout has
/// settled after the render that triggered the effect.
pub const SCROLL_SETTLE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    Form,
    Confirmation,
}

/// Presentation side effects the widget asks its host to perform. Effects
/// are queued on state transitions and drained by the view layer AFTER the
/// new state has been rendered, never before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollToCalendarHeader { settle_ms: u64 },
    OpenMailDraft { mailto_url: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    /// Name, email and phone are required; the message is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The booking widget: guest counts, week selection and the
/// Calendar -> Form -> Confirmation flow. Long-lived within a page
/// session; there is no terminal state.
pub struct BookingWidget {
    guests: GuestCount,
    selection: WeekSelection,
    view: ViewMode,
    pub form: FormFields,
    error_message: Option<String>,
    submitting: bool,
    effects: VecDeque<ViewEffect>,
    submitter: Arc<dyn InquirySubmitter>,
}

impl BookingWidget {
    pub fn new(submitter: Arc<dyn InquirySubmitter>) -> Self {
        Self {
            guests: GuestCount::default(),
            selection: WeekSelection::default(),
            view: ViewMode::Calendar,
            form: FormFields::default(),
            error_message: None,
            submitting: false,
            effects: VecDeque::new(),
            submitter,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn guests(&self) -> &GuestCount {
        &self.guests
    }

    pub fn selection(&self) -> &WeekSelection {
        &self.selection
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn summary(&self) -> PriceSummary {
        self.selection.summary()
    }

    pub fn increment_adults(&mut self) {
        self.guests.increment_adults();
    }

    pub fn decrement_adults(&mut self) {
        self.guests.decrement_adults();
    }

    pub fn increment_children(&mut self) {
        self.guests.increment_children();
    }

    pub fn decrement_children(&mut self) {
        self.guests.decrement_children();
    }

    pub fn toggle_week(&mut self, label: &str) {
        self.selection.toggle(label);
    }

    /// UI-level guard: the trigger is disabled while nothing is selected,
    /// so an empty selection is ignored rather than treated as an error.
    pub fn proceed_to_form(&mut self) {
        if self.view != ViewMode::Calendar || self.selection.is_empty() {
            return;
        }
        self.view = ViewMode::Form;
        self.effects
            .push_back(ViewEffect::ScrollToCalendarHeader { settle_ms: SCROLL_SETTLE_MS });
    }

    /// Submits the current form through the configured strategy. At most
    /// one submission is in flight at a time; incomplete required fields
    /// are prevented by the input layer and ignored here.
    pub async fn submit_inquiry(&mut self) {
        if self.view != ViewMode::Form || self.submitting {
            return;
        }
        if self.selection.is_empty() || !self.form.is_complete() {
            return;
        }

        self.submitting = true;
        let request = self.build_request();
        let disposition = self.submitter.submit(&request).await;
        self.submitting = false;

        match disposition {
            SubmitDisposition::Delivered { .. } => {
                self.error_message = None;
                self.view = ViewMode::Confirmation;
                self.effects
                    .push_back(ViewEffect::ScrollToCalendarHeader { settle_ms: SCROLL_SETTLE_MS });
            }
            SubmitDisposition::MailDraft { mailto_url } => {
                self.error_message = None;
                self.view = ViewMode::Confirmation;
                self.effects.push_back(ViewEffect::OpenMailDraft { mailto_url });
                self.effects
                    .push_back(ViewEffect::ScrollToCalendarHeader { settle_ms: SCROLL_SETTLE_MS });
            }
            SubmitDisposition::Rejected { message } => {
                // Stay on the form so the user can retry without retyping.
                self.error_message = Some(message);
            }
        }
    }

    /// Back to the calendar from either view. The selection is kept so the
    /// calendar still reflects it; form fields are kept too.
    pub fn back_to_calendar(&mut self) {
        if self.view == ViewMode::Calendar {
            return;
        }
        self.view = ViewMode::Calendar;
        self.error_message = None;
    }

    /// "Submit another request" from the confirmation screen: fields are
    /// cleared, the selection is not.
    pub fn submit_another(&mut self) {
        if self.view != ViewMode::Confirmation {
            return;
        }
        self.form.clear();
        self.error_message = None;
        self.view = ViewMode::Form;
    }

    /// Drains queued presentation effects. The host calls this after
    /// committing the render for the current state.
    pub fn take_effects(&mut self) -> Vec<ViewEffect> {
        self.effects.drain(..).collect()
    }

    fn build_request(&self) -> InquiryRequest {
        let summary = self.selection.summary();
        InquiryRequest {
            name: self.form.name.trim().to_string(),
            email: self.form.email.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            message: self.form.message.trim().to_string(),
            selected_week: self.selection.joined(),
            selected_price: summary.direct_total,
            guests: self.guests.total(),
        }
    }
}
