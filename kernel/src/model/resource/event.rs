use crate::model::id::ResourceId;

pub struct CreateResource {
    pub name: String,
    pub description: Option<String>,
}

pub struct DeleteResource {
    pub resource_id: ResourceId,
}
