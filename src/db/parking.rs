use crate::db::postgres_service::PostgresService;
use crate::graphql::types::parking::{CreateParkingInput, UpdateParkingInput};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::parking::{ActiveModel as ParkingActive, Entity as Parking, Model as ParkingModel};
use entity::sea_orm_active_enums::ParkingStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_parking(&self, input: CreateParkingInput) -> Result<ParkingModel, AppError> {
        // Reject dangling company references with a domain error, not a 500.
        self.get_company(input.company_id).await?;
        let now = Utc::now();
        Ok(ParkingActive {
            id: Set(new_id()),
            name: Set(input.name),
            address: Set(input.address),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            status: Set(input.status.unwrap_or(ParkingStatus::Available)),
            capacity: Set(input.capacity),
            price_per_hour: Set(input.price_per_hour),
            company_id: Set(input.company_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_parking(&self, id: Uuid) -> Result<ParkingModel, AppError> {
        Ok(Parking::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Parking not found".into()))?)
    }

    pub async fn list_parkings(
        &self,
        company_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ParkingModel>, u64), AppError> {
        let mut finder = Parking::find().order_by_desc(entity::parking::Column::CreatedAt);
        if let Some(cid) = company_id {
            finder = finder.filter(entity::parking::Column::CompanyId.eq(cid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_parking(
        &self,
        id: Uuid,
        input: UpdateParkingInput,
    ) -> Result<ParkingModel, AppError> {
        let mut am: ParkingActive = self.get_parking(id).await?.into();
        if let Some(name) = input.name {
            am.name = Set(name);
        }
        if let Some(address) = input.address {
            am.address = Set(address);
        }
        if let Some(latitude) = input.latitude {
            am.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = input.longitude {
            am.longitude = Set(Some(longitude));
        }
        if let Some(status) = input.status {
            am.status = Set(status);
        }
        if let Some(capacity) = input.capacity {
            am.capacity = Set(capacity);
        }
        if let Some(price) = input.price_per_hour {
            am.price_per_hour = Set(price);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn set_parking_status(
        &self,
        id: Uuid,
        status: ParkingStatus,
    ) -> Result<ParkingModel, AppError> {
        let mut am: ParkingActive = self.get_parking(id).await?.into();
        am.status = Set(status);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_parking(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Parking::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Parking not found".into()));
        }
        Ok(true)
    }
}
