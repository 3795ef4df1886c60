use crate::domain::ports::EmailService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Transactional email provider reached over its HTTP API with a bearer
/// token. The sender address is fixed per deployment.
pub struct HttpEmailService {
    client: Client,
    api_url: String,
    api_key: String,
    from_addr: String,
}

impl HttpEmailService {
    pub fn new(api_url: String, api_key: String, from_addr: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            from_addr,
        }
    }
}

#[derive(Serialize)]
struct EmailPayload {
    from_addr: String,
    to_addr: String,
    subject: String,
    html_body: String,
    text_body: String,
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), AppError> {
        let payload = EmailPayload {
            from_addr: self.from_addr.clone(),
            to_addr: recipient.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
            text_body: text_body.to_string(),
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Email service connection error: {}", e);
                error!("{}", msg);
                AppError::Email(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Email service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Email(msg));
        }

        Ok(())
    }
}
