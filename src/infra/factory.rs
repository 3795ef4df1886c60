use std::sync::Arc;
use tera::Tera;

use crate::config::Config;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::sheets::google_sheets_store::GoogleSheetsStore;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let record_store = Arc::new(GoogleSheetsStore::new(
        config.sheet_id.clone(),
        config.google_client_email.clone(),
        config.google_private_key.clone(),
    ));

    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
        config.mail_from.clone(),
    ));

    let mut tera = Tera::default();
    tera.add_raw_template(
        "inquiry_notification.html",
        include_str!("../templates/inquiry_notification.html"),
    )
    .expect("Failed to load HTML notification template");
    tera.add_raw_template(
        "inquiry_notification.txt",
        include_str!("../templates/inquiry_notification.txt"),
    )
    .expect("Failed to load text notification template");
    let templates = Arc::new(tera);

    AppState {
        config: config.clone(),
        record_store,
        email_service,
        templates,
    }
}
