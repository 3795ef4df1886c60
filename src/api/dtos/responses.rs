use serde::Serialize;

#[derive(Serialize)]
pub struct SubmitFormResponse {
    pub success: bool,
    pub message: String,
}
