use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::payment::Model> for Payment {
    fn from(m: entity::payment::Model) -> Self {
        Payment {
            id: m.id,
            user_id: m.user_id,
            reservation_id: m.reservation_id,
            amount: m.amount,
            method: m.method,
            status: m.status,
            transaction_ref: m.transaction_ref,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreatePaymentInput {
    /// Defaults to the authenticated user; paying on behalf of someone else
    /// requires the manage-payments capability.
    pub user_id: Option<Uuid>,
    pub reservation_id: Option<Uuid>,
    pub amount: f64,
    pub method: PaymentMethod,
    pub transaction_ref: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdatePaymentInput {
    pub status: Option<PaymentStatus>,
    pub amount: Option<f64>,
    pub transaction_ref: Option<String>,
}
