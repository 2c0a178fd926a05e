use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub company_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::reservation::Model> for Reservation {
    fn from(m: entity::reservation::Model) -> Self {
        Reservation {
            id: m.id,
            user_id: m.user_id,
            vehicle_id: m.vehicle_id,
            parking_id: m.parking_id,
            company_id: m.company_id,
            start_time: m.start_time,
            end_time: m.end_time,
            status: m.status,
            total_price: m.total_price,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateReservationInput {
    /// Defaults to the authenticated user; booking for someone else
    /// requires the manage-reservations capability.
    pub user_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Derived from the parking hourly price when omitted.
    pub total_price: Option<f64>,
}

#[derive(Debug, InputObject)]
pub struct UpdateReservationInput {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<ReservationStatus>,
    pub total_price: Option<f64>,
}
