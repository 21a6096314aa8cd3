use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::SiteId,
    site::{
        event::{CreateSite, UpdateSite},
        Site,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSiteRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(skip)]
    pub address: Option<String>,
}

impl From<CreateSiteRequest> for CreateSite {
    fn from(value: CreateSiteRequest) -> Self {
        let CreateSiteRequest {
            name,
            city,
            address,
        } = value;
        CreateSite {
            name,
            city,
            address,
        }
    }
}

#[derive(new)]
pub struct UpdateSiteRequestWithId(SiteId, CreateSiteRequest);
impl From<UpdateSiteRequestWithId> for UpdateSite {
    fn from(value: UpdateSiteRequestWithId) -> Self {
        let UpdateSiteRequestWithId(
            site_id,
            CreateSiteRequest {
                name,
                city,
                address,
            },
        ) = value;
        UpdateSite {
            site_id,
            name,
            city,
            address,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub items: Vec<SiteResponse>,
}

impl From<Vec<Site>> for SitesResponse {
    fn from(value: Vec<Site>) -> Self {
        Self {
            items: value.into_iter().map(SiteResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub id: SiteId,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Site> for SiteResponse {
    fn from(value: Site) -> Self {
        let Site {
            site_id,
            name,
            city,
            address,
            created_at,
            updated_at,
        } = value;
        Self {
            id: site_id,
            name,
            city,
            address,
            created_at,
            updated_at,
        }
    }
}
