use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ParkingStatus;
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Parking {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: ParkingStatus,
    pub capacity: i32,
    pub price_per_hour: f64,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::parking::Model> for Parking {
    fn from(m: entity::parking::Model) -> Self {
        Parking {
            id: m.id,
            name: m.name,
            address: m.address,
            latitude: m.latitude,
            longitude: m.longitude,
            status: m.status,
            capacity: m.capacity,
            price_per_hour: m.price_per_hour,
            company_id: m.company_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateParkingInput {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Defaults to AVAILABLE.
    pub status: Option<ParkingStatus>,
    pub capacity: i32,
    pub price_per_hour: f64,
    pub company_id: Uuid,
}

#[derive(Debug, InputObject)]
pub struct UpdateParkingInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<ParkingStatus>,
    pub capacity: Option<i32>,
    pub price_per_hour: Option<f64>,
}
