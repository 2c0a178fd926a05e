use crate::db::postgres_service::PostgresService;
use crate::graphql::types::reservation::UpdateReservationInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::{DateTime, Utc};
use entity::reservation::{
    ActiveModel as ReservationActive, Entity as Reservation, Model as ReservationModel,
};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

pub struct NewReservation {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_id: Uuid,
    pub company_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: f64,
}

impl PostgresService {
    pub async fn create_reservation(
        &self,
        payload: NewReservation,
    ) -> Result<ReservationModel, AppError> {
        let now = Utc::now();
        Ok(ReservationActive {
            id: Set(new_id()),
            user_id: Set(payload.user_id),
            vehicle_id: Set(payload.vehicle_id),
            parking_id: Set(payload.parking_id),
            company_id: Set(payload.company_id),
            start_time: Set(payload.start_time),
            end_time: Set(payload.end_time),
            status: Set(ReservationStatus::Pending),
            total_price: Set(payload.total_price),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_reservation(&self, id: Uuid) -> Result<ReservationModel, AppError> {
        Ok(Reservation::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Reservation not found".into()))?)
    }

    pub async fn list_reservations(
        &self,
        company_id: Option<Uuid>,
        user_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReservationModel>, u64), AppError> {
        let mut finder = Reservation::find().order_by_desc(entity::reservation::Column::CreatedAt);
        if let Some(cid) = company_id {
            finder = finder.filter(entity::reservation::Column::CompanyId.eq(cid));
        }
        if let Some(uid) = user_id {
            finder = finder.filter(entity::reservation::Column::UserId.eq(uid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_reservation(
        &self,
        id: Uuid,
        input: UpdateReservationInput,
    ) -> Result<ReservationModel, AppError> {
        let mut am: ReservationActive = self.get_reservation(id).await?.into();
        if let Some(start_time) = input.start_time {
            am.start_time = Set(start_time);
        }
        if let Some(end_time) = input.end_time {
            am.end_time = Set(end_time);
        }
        if let Some(status) = input.status {
            am.status = Set(status);
        }
        if let Some(total_price) = input.total_price {
            am.total_price = Set(total_price);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn set_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<ReservationModel, AppError> {
        let mut am: ReservationActive = self.get_reservation(id).await?.into();
        am.status = Set(status);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_reservation(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Reservation::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Reservation not found".into()));
        }
        Ok(true)
    }
}
