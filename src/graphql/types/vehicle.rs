use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::vehicle::Model> for Vehicle {
    fn from(m: entity::vehicle::Model) -> Self {
        Vehicle {
            id: m.id,
            license_plate: m.license_plate,
            make: m.make,
            model: m.model,
            year: m.year,
            color: m.color,
            user_id: m.user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateVehicleInput {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    /// Defaults to the authenticated user; setting it for someone else
    /// requires the manage-vehicles capability.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, InputObject)]
pub struct UpdateVehicleInput {
    pub license_plate: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
}
