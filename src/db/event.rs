use crate::db::postgres_service::PostgresService;
use crate::graphql::types::event::UpdateEventInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::{DateTime, Utc};
use entity::event::{ActiveModel as EventActive, Entity as Event, Model as EventModel};
use entity::sea_orm_active_enums::EventType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

pub struct NewEvent {
    pub event_type: EventType,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub gate: Option<String>,
    pub qr_code: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl PostgresService {
    pub async fn create_event(&self, payload: NewEvent) -> Result<EventModel, AppError> {
        // Validate related records so we can send domain errors instead of 500s.
        self.get_vehicle(payload.vehicle_id).await?;
        self.get_parking(payload.parking_id).await?;
        if let Some(rid) = payload.reservation_id {
            self.get_reservation(rid).await?;
        }
        Ok(EventActive {
            id: Set(new_id()),
            event_type: Set(payload.event_type),
            user_id: Set(payload.user_id),
            vehicle_id: Set(payload.vehicle_id),
            parking_id: Set(payload.parking_id),
            reservation_id: Set(payload.reservation_id),
            gate: Set(payload.gate),
            qr_code: Set(payload.qr_code),
            timestamp: Set(payload.timestamp),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<EventModel, AppError> {
        Ok(Event::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Event not found".into()))?)
    }

    pub async fn list_events(
        &self,
        parking_id: Option<Uuid>,
        user_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EventModel>, u64), AppError> {
        let mut finder = Event::find().order_by_desc(entity::event::Column::Timestamp);
        if let Some(pid) = parking_id {
            finder = finder.filter(entity::event::Column::ParkingId.eq(pid));
        }
        if let Some(uid) = user_id {
            finder = finder.filter(entity::event::Column::UserId.eq(uid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_event(&self, id: Uuid, input: UpdateEventInput) -> Result<EventModel, AppError> {
        let mut am: EventActive = self.get_event(id).await?.into();
        if let Some(gate) = input.gate {
            am.gate = Set(Some(gate));
        }
        if let Some(reservation_id) = input.reservation_id {
            self.get_reservation(reservation_id).await?;
            am.reservation_id = Set(Some(reservation_id));
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Event::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(true)
    }
}
