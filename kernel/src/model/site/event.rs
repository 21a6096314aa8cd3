use crate::model::id::SiteId;

pub struct CreateSite {
    pub name: String,
    pub city: String,
    pub address: Option<String>,
}

#[derive(Debug)]
pub struct UpdateSite {
    pub site_id: SiteId,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
}

#[derive(Debug)]
pub struct DeleteSite {
    pub site_id: SiteId,
}
