use chrono::{DateTime, Utc};
use kernel::model::{id::SiteId, site::Site};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRow {
    pub id: SiteId,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for SiteRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl From<SiteRow> for Site {
    fn from(value: SiteRow) -> Self {
        let SiteRow {
            id,
            name,
            city,
            address,
            created_at,
            updated_at,
        } = value;
        Site {
            site_id: id,
            name,
            city,
            address,
            created_at,
            updated_at,
        }
    }
}
