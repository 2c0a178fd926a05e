use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventType;
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Event {
    pub id: Uuid,
    pub event_type: EventType,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub gate: Option<String>,
    pub qr_code: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::event::Model> for Event {
    fn from(m: entity::event::Model) -> Self {
        Event {
            id: m.id,
            event_type: m.event_type,
            user_id: m.user_id,
            vehicle_id: m.vehicle_id,
            parking_id: m.parking_id,
            reservation_id: m.reservation_id,
            gate: m.gate,
            qr_code: m.qr_code,
            timestamp: m.timestamp,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateEventInput {
    pub event_type: EventType,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub gate: Option<String>,
    pub qr_code: Option<String>,
    /// Defaults to now.
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, InputObject)]
pub struct UpdateEventInput {
    pub gate: Option<String>,
    pub reservation_id: Option<Uuid>,
}
