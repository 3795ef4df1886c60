use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{EmailService, RecordStore};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub record_store: Arc<dyn RecordStore>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}
