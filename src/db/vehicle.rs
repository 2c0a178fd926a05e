use crate::db::postgres_service::PostgresService;
use crate::graphql::types::vehicle::UpdateVehicleInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::vehicle::{ActiveModel as VehicleActive, Entity as Vehicle, Model as VehicleModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use uuid::Uuid;

pub struct NewVehicle {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub user_id: Uuid,
}

impl PostgresService {
    pub async fn create_vehicle(&self, payload: NewVehicle) -> Result<VehicleModel, AppError> {
        let now = Utc::now();
        let res = VehicleActive {
            id: Set(new_id()),
            license_plate: Set(payload.license_plate),
            make: Set(payload.make),
            model: Set(payload.model),
            year: Set(payload.year),
            color: Set(payload.color),
            user_id: Set(payload.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await;
        match res {
            Ok(model) => Ok(model),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(AppError::NotFound("User not found".into()))
                }
                _ => Err(err.into()),
            },
        }
    }

    pub async fn get_vehicle(&self, id: Uuid) -> Result<VehicleModel, AppError> {
        Ok(Vehicle::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Vehicle not found".into()))?)
    }

    pub async fn list_vehicles(
        &self,
        user_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<VehicleModel>, u64), AppError> {
        let mut finder = Vehicle::find().order_by_desc(entity::vehicle::Column::CreatedAt);
        if let Some(uid) = user_id {
            finder = finder.filter(entity::vehicle::Column::UserId.eq(uid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_vehicle(
        &self,
        id: Uuid,
        input: UpdateVehicleInput,
    ) -> Result<VehicleModel, AppError> {
        let mut am: VehicleActive = self.get_vehicle(id).await?.into();
        if let Some(plate) = input.license_plate {
            am.license_plate = Set(plate);
        }
        if let Some(make) = input.make {
            am.make = Set(make);
        }
        if let Some(model) = input.model {
            am.model = Set(model);
        }
        if let Some(year) = input.year {
            am.year = Set(year);
        }
        if let Some(color) = input.color {
            am.color = Set(Some(color));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_vehicle(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Vehicle::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Vehicle not found".into()));
        }
        Ok(true)
    }
}
