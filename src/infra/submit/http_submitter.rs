use crate::domain::models::inquiry::{InquiryRequest, InquiryResult};
use crate::domain::ports::{InquirySubmitter, SubmitDisposition};
use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

/// Shown when the endpoint cannot be reached or answers with something
/// other than the expected JSON shape. Retry-able from the form.
const TRANSPORT_FAILURE_MESSAGE: &str =
    "Could not submit your request. Please check your connection and try again.";

/// Delivers inquiries to the form-submission endpoint as a form-encoded
/// POST and interprets its `{success, message}` reply.
pub struct HttpSubmitter {
    client: Client,
    endpoint_url: String,
}

impl HttpSubmitter {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: Client::new(),
            endpoint_url,
        }
    }
}

#[async_trait]
impl InquirySubmitter for HttpSubmitter {
    async fn submit(&self, inquiry: &InquiryRequest) -> SubmitDisposition {
        let res = match self.client.post(&self.endpoint_url).form(inquiry).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("Inquiry endpoint unreachable: {}", e);
                return SubmitDisposition::Rejected {
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                };
            }
        };

        // Both the 200 and 500 paths carry the same JSON body shape.
        match res.json::<InquiryResult>().await {
            Ok(result) if result.success => SubmitDisposition::Delivered { message: result.message },
            Ok(result) => SubmitDisposition::Rejected { message: result.message },
            Err(e) => {
                warn!("Unreadable inquiry endpoint response: {}", e);
                SubmitDisposition::Rejected {
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}
