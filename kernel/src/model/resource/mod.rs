use crate::model::id::ResourceId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Resource {
    pub resource_id: ResourceId,
    pub name: String,
    pub description: Option<String>,
}
