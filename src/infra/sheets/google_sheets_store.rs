use crate::domain::models::inquiry::Inquiry;
use crate::domain::ports::RecordStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info};

const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Inquiries land on the first worksheet.
const APPEND_RANGE: &str = "Sheet1!A1";

/// Tokens are refreshed this many seconds before their stated expiry.
const TOKEN_EXPIRY_SLACK_SECS: i64 = 60;

#[derive(Serialize)]
struct ServiceAccountClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Serialize)]
struct AppendPayload {
    values: Vec<Vec<String>>,
}

struct CachedToken {
    access_token: String,
    expires_at: i64,
}

/// Append-only client for the Google Sheets record store, authenticated
/// with a service account.
pub struct GoogleSheetsStore {
    client: Client,
    sheet_id: String,
    client_email: String,
    private_key: String,
    token_url: String,
    api_base: String,
    cached_token: Mutex<Option<CachedToken>>,
}

impl GoogleSheetsStore {
    pub fn new(sheet_id: String, client_email: String, private_key: String) -> Self {
        Self {
            client: Client::new(),
            sheet_id,
            client_email,
            private_key,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            cached_token: Mutex::new(None),
        }
    }

    /// Points the client at alternative OAuth/API hosts. Test servers use
    /// this; production keeps the Google defaults.
    pub fn with_endpoints(mut self, token_url: String, api_base: String) -> Self {
        self.token_url = token_url;
        self.api_base = api_base;
        self
    }

    async fn access_token(&self) -> Result<String, AppError> {
        let now = Utc::now().timestamp();

        let mut cached = self.cached_token.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at - TOKEN_EXPIRY_SLACK_SECS > now
        {
            return Ok(token.access_token.clone());
        }

        let claims = ServiceAccountClaims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.token_url,
            iat: now,
            exp: now + 3600,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| AppError::Credentials(format!("Invalid service account key: {}", e)))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| AppError::Credentials(format!("Failed to sign token assertion: {}", e)))?;

        let params = [("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())];
        let res = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Token endpoint connection error: {}", e);
                error!("{}", msg);
                AppError::Credentials(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Token exchange failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Credentials(msg));
        }

        let token: TokenResponse = res
            .json()
            .await
            .map_err(|e| AppError::Credentials(format!("Malformed token response: {}", e)))?;

        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: now + token.expires_in,
        });

        Ok(access_token)
    }
}

#[async_trait]
impl RecordStore for GoogleSheetsStore {
    async fn append_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        let token = self.access_token().await?;

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.api_base, self.sheet_id, APPEND_RANGE
        );

        let payload = AppendPayload { values: vec![inquiry.to_row()] };

        let res = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Sheets connection error: {}", e);
                error!("{}", msg);
                AppError::RecordStore(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Sheets append failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::RecordStore(msg));
        }

        info!("Inquiry row appended for {}", inquiry.email);
        Ok(())
    }
}
