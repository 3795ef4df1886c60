use inquiry_backend::{
    api::router::create_router,
    config::Config,
    domain::models::inquiry::Inquiry,
    domain::ports::{EmailService, RecordStore},
    error::AppError,
    state::AppState,
};
use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};
use tera::Tera;

#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

pub struct RecordingStore {
    pub rows: Mutex<Vec<Vec<String>>>,
    fail: bool,
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn append_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::RecordStore("sheet rejected the append".to_string()));
        }
        self.rows.lock().unwrap().push(inquiry.to_row());
        Ok(())
    }
}

pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentEmail>>,
    pub attempts: Mutex<u32>,
    fail: bool,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), AppError> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::Email("mail service rejected the send".to_string()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
            text_body: text_body.to_string(),
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub store: Arc<RecordingStore>,
    pub mailer: Arc<RecordingEmailService>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::build(default_recipients(), false, false)
    }

    pub fn without_recipients() -> Self {
        Self::build(Vec::new(), false, false)
    }

    pub fn with_failing_store() -> Self {
        Self::build(default_recipients(), true, false)
    }

    pub fn with_failing_mailer() -> Self {
        Self::build(default_recipients(), false, true)
    }

    fn build(recipients: Vec<String>, fail_store: bool, fail_mailer: bool) -> Self {
        let config = Config {
            port: 0,
            sheet_id: "test-sheet-id".to_string(),
            google_client_email: "svc@test-project.iam.gserviceaccount.com".to_string(),
            google_private_key: "unused-by-mock".to_string(),
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            mail_from: "bookings@searench.com".to_string(),
            notify_recipients: recipients,
        };

        let mut tera = Tera::default();
        tera.add_raw_template(
            "inquiry_notification.html",
            "<html>{{ name }} / {{ week }} / {{ spreadsheet_link }}</html>",
        )
        .unwrap();
        tera.add_raw_template("inquiry_notification.txt", "{{ name }} / {{ rate }}").unwrap();
        let templates = Arc::new(tera);

        let store = Arc::new(RecordingStore { rows: Mutex::new(Vec::new()), fail: fail_store });
        let mailer = Arc::new(RecordingEmailService {
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            fail: fail_mailer,
        });

        let state = Arc::new(AppState {
            config,
            record_store: store.clone(),
            email_service: mailer.clone(),
            templates,
        });

        let router = create_router(state.clone());

        Self { router, state, store, mailer }
    }
}

fn default_recipients() -> Vec<String> {
    vec!["owner@example.com".to_string(), "manager@example.com".to_string()]
}
