use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ResourceId, RoomId, SiteId},
    room::{
        event::{AttachResource, CreateRoom, UpdateRoom},
        Room, RoomListOptions, RoomResource, RoomWithResources,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct RoomListQuery {
    #[garde(skip)]
    pub site_id: Option<SiteId>,
}

impl From<RoomListQuery> for RoomListOptions {
    fn from(value: RoomListQuery) -> Self {
        let RoomListQuery { site_id } = value;
        Self { site_id }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub site_id: SiteId,
    #[garde(range(min = 1))]
    pub capacity: i32,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            name,
            site_id,
            capacity,
        } = value;
        CreateRoom {
            name,
            site_id,
            capacity,
        }
    }
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, CreateRoomRequest);
impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            CreateRoomRequest {
                name,
                site_id,
                capacity,
            },
        ) = value;
        UpdateRoom {
            room_id,
            name,
            site_id,
            capacity,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AttachResourceRequest {
    #[garde(skip)]
    pub resource_id: ResourceId,
    #[garde(range(min = 1))]
    pub quantity: i32,
}

#[derive(new)]
pub struct AttachResourceRequestWithRoomId(RoomId, AttachResourceRequest);
impl From<AttachResourceRequestWithRoomId> for AttachResource {
    fn from(value: AttachResourceRequestWithRoomId) -> Self {
        let AttachResourceRequestWithRoomId(
            room_id,
            AttachResourceRequest {
                resource_id,
                quantity,
            },
        ) = value;
        AttachResource::new(room_id, resource_id, quantity)
    }
}

#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub site_id: SiteId,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            site_id,
            capacity,
            created_at,
            updated_at,
        } = value;
        Self {
            id: room_id,
            name,
            site_id,
            capacity,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResourceResponse {
    pub resource_id: ResourceId,
    pub name: String,
    pub quantity: i32,
}

impl From<RoomResource> for RoomResourceResponse {
    fn from(value: RoomResource) -> Self {
        let RoomResource {
            resource_id,
            name,
            quantity,
        } = value;
        Self {
            resource_id,
            name,
            quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResourcesResponse {
    pub items: Vec<RoomResourceResponse>,
}

impl From<Vec<RoomResource>> for RoomResourcesResponse {
    fn from(value: Vec<RoomResource>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(RoomResourceResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomWithResourcesResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub resources: Vec<RoomResourceResponse>,
}

impl From<RoomWithResources> for RoomWithResourcesResponse {
    fn from(value: RoomWithResources) -> Self {
        let RoomWithResources { room, resources } = value;
        Self {
            room: room.into(),
            resources: resources
                .into_iter()
                .map(RoomResourceResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_must_be_positive() {
        let req: CreateRoomRequest = serde_json::from_value(serde_json::json!({
            "name": "Sala Roja",
            "site_id": 1,
            "capacity": 0
        }))
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn room_with_resources_is_flattened() {
        let now = Utc::now();
        let response = RoomWithResourcesResponse::from(RoomWithResources {
            room: Room {
                room_id: RoomId::new(3),
                name: "Sala Roja".into(),
                site_id: SiteId::new(1),
                capacity: 6,
                created_at: now,
                updated_at: now,
            },
            resources: vec![RoomResource {
                resource_id: ResourceId::new(2),
                name: "Projector".into(),
                quantity: 1,
            }],
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["site_id"], 1);
        assert_eq!(json["resources"][0]["name"], "Projector");
    }
}
