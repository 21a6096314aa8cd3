use garde::Validate;
use kernel::model::{
    id::ResourceId,
    resource::{event::CreateResource, Resource},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub description: Option<String>,
}

impl From<CreateResourceRequest> for CreateResource {
    fn from(value: CreateResourceRequest) -> Self {
        let CreateResourceRequest { name, description } = value;
        CreateResource { name, description }
    }
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub items: Vec<ResourceResponse>,
}

impl From<Vec<Resource>> for ResourcesResponse {
    fn from(value: Vec<Resource>) -> Self {
        Self {
            items: value.into_iter().map(ResourceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Resource> for ResourceResponse {
    fn from(value: Resource) -> Self {
        let Resource {
            resource_id,
            name,
            description,
        } = value;
        Self {
            id: resource_id,
            name,
            description,
        }
    }
}
