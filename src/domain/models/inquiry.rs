use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status marker written into the record store for every new inquiry.
pub const INITIAL_STATUS: &str = "New";

/// The submission the widget sends over the wire. Field names match the
/// form keys the endpoint expects.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "selectedWeek")]
    pub selected_week: String,
    #[serde(rename = "selectedPrice")]
    pub selected_price: i64,
    pub guests: u32,
}

/// The endpoint's JSON reply.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryResult {
    pub success: bool,
    pub message: String,
}

pub struct NewInquiryParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub week: Option<String>,
    pub guests: Option<u32>,
    pub rate: Option<i64>,
}

/// A received inquiry with the server-assigned submission time. The record
/// store holds these as append-only rows; nothing is persisted locally.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub week: String,
    pub guests: String,
    pub rate: String,
    pub status: String,
}

impl Inquiry {
    pub fn new(params: NewInquiryParams) -> Self {
        Self {
            submitted_at: Utc::now(),
            name: params.name,
            email: params.email,
            phone: params.phone,
            message: params.message.unwrap_or_default(),
            week: params.week.unwrap_or_default(),
            guests: params.guests.map(|g| g.to_string()).unwrap_or_default(),
            rate: params.rate.map(|r| r.to_string()).unwrap_or_default(),
            status: INITIAL_STATUS.to_string(),
        }
    }

    /// Cells in the exact column order of the spreadsheet schema:
    /// Timestamp, Name, Email, Phone, Message, Week, Guests, Rate, Status.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.submitted_at.to_rfc3339(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.message.clone(),
            self.week.clone(),
            self.guests.clone(),
            self.rate.clone(),
            self.status.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_sheet_schema() {
        let inquiry = Inquiry::new(NewInquiryParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "(555) 555-5555".to_string(),
            message: Some("Two families".to_string()),
            week: Some("July 12-19, Aug 23-30".to_string()),
            guests: Some(6),
            rate: Some(14100),
        });

        let row = inquiry.to_row();
        assert_eq!(row.len(), 9);
        assert_eq!(row[0], inquiry.submitted_at.to_rfc3339());
        assert_eq!(
            &row[1..],
            &[
                "Alice",
                "alice@example.com",
                "(555) 555-5555",
                "Two families",
                "July 12-19, Aug 23-30",
                "6",
                "14100",
                "New",
            ]
        );
    }

    #[test]
    fn test_optional_fields_default_to_empty_cells() {
        let inquiry = Inquiry::new(NewInquiryParams {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555".to_string(),
            message: None,
            week: None,
            guests: None,
            rate: None,
        });

        let row = inquiry.to_row();
        assert_eq!(row[4], "");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "");
        assert_eq!(row[8], "New");
    }
}
