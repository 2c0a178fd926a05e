use crate::db::postgres_service::PostgresService;
use crate::graphql::types::payment::UpdatePaymentInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::payment::{ActiveModel as PaymentActive, Entity as Payment, Model as PaymentModel};
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

pub struct NewPayment {
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub amount: f64,
    pub method: PaymentMethod,
    pub transaction_ref: Option<String>,
}

impl PostgresService {
    pub async fn create_payment(&self, payload: NewPayment) -> Result<PaymentModel, AppError> {
        if let Some(rid) = payload.reservation_id {
            self.get_reservation(rid).await?;
        }
        let now = Utc::now();
        Ok(PaymentActive {
            id: Set(new_id()),
            user_id: Set(payload.user_id),
            reservation_id: Set(payload.reservation_id),
            amount: Set(payload.amount),
            method: Set(payload.method),
            status: Set(PaymentStatus::Pending),
            transaction_ref: Set(payload.transaction_ref),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_payment(&self, id: Uuid) -> Result<PaymentModel, AppError> {
        Ok(Payment::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Payment not found".into()))?)
    }

    pub async fn list_payments(
        &self,
        user_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PaymentModel>, u64), AppError> {
        let mut finder = Payment::find().order_by_desc(entity::payment::Column::CreatedAt);
        if let Some(uid) = user_id {
            finder = finder.filter(entity::payment::Column::UserId.eq(uid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_payment(
        &self,
        id: Uuid,
        input: UpdatePaymentInput,
    ) -> Result<PaymentModel, AppError> {
        let mut am: PaymentActive = self.get_payment(id).await?.into();
        if let Some(status) = input.status {
            am.status = Set(status);
        }
        if let Some(amount) = input.amount {
            am.amount = Set(amount);
        }
        if let Some(transaction_ref) = input.transaction_ref {
            am.transaction_ref = Set(Some(transaction_ref));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_payment(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Payment::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Payment not found".into()));
        }
        Ok(true)
    }
}
