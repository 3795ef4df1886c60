use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub sheet_id: String,
    pub google_client_email: String,
    pub google_private_key: String, // RSA private key (PEM)
    pub mail_service_url: String,
    pub mail_service_token: String,
    pub mail_from: String,
    pub notify_recipients: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            sheet_id: env::var("GOOGLE_SHEET_ID").expect("GOOGLE_SHEET_ID must be set"),
            google_client_email: env::var("GOOGLE_CLIENT_EMAIL").expect("GOOGLE_CLIENT_EMAIL must be set"),
            // Deployment platforms store the key with literal \n escapes.
            google_private_key: env::var("GOOGLE_PRIVATE_KEY")
                .expect("GOOGLE_PRIVATE_KEY must be set")
                .replace("\\n", "\n"),
            mail_service_url: env::var("MAIL_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            mail_service_token: env::var("MAIL_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| "bookings@searench.com".to_string()),
            notify_recipients: env::var("NOTIFY_RECIPIENTS")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn spreadsheet_link(&self) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", self.sheet_id)
    }
}
