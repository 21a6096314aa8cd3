use kernel::model::{id::ResourceId, resource::Resource};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRow {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record for ResourceRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl From<ResourceRow> for Resource {
    fn from(value: ResourceRow) -> Self {
        let ResourceRow {
            id,
            name,
            description,
        } = value;
        Resource {
            resource_id: id,
            name,
            description,
        }
    }
}
