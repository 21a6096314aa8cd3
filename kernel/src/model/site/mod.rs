use crate::model::id::SiteId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Site {
    pub site_id: SiteId,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
