use serde::Deserialize;

/// Form-encoded body of POST /api/submit-form. The widget is the only
/// caller in practice; beyond the presence of the required contact fields
/// no server-side validation is performed.
#[derive(Deserialize)]
pub struct SubmitFormRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    #[serde(rename = "selectedWeek")]
    pub selected_week: Option<String>,
    #[serde(rename = "selectedPrice")]
    pub selected_price: Option<i64>,
    pub guests: Option<u32>,
}
