use crate::db::payment::NewPayment;
use crate::graphql::types::payment::{CreatePaymentInput, Payment, UpdatePaymentInput};
use crate::graphql::{current_user, db, require_capability};
use crate::types::error::AppError;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct PaymentMutation;

#[Object]
impl PaymentMutation {
    async fn create_payment(
        &self,
        ctx: &Context<'_>,
        input: CreatePaymentInput,
    ) -> Result<Payment> {
        let current = current_user(ctx)?;
        let user_id = input.user_id.unwrap_or(current.id);
        if user_id != current.id && !current.permissions().can_manage_payments {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        let mut errs = FieldErrors::new();
        errs.require(input.amount > 0.0, "amount", "must be positive");
        errs.finish("Invalid payment input")?;

        if let Some(reservation_id) = input.reservation_id {
            let reservation = db(ctx).get_reservation(reservation_id).await?;
            if reservation.user_id != user_id && !current.permissions().can_manage_payments {
                return Err(
                    AppError::Forbidden("reservation belongs to another user".into()).into(),
                );
            }
        }

        let payment = db(ctx)
            .create_payment(NewPayment {
                user_id,
                reservation_id: input.reservation_id,
                amount: input.amount,
                method: input.method,
                transaction_ref: input.transaction_ref,
            })
            .await?;
        Ok(payment.into())
    }

    async fn update_payment(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdatePaymentInput,
    ) -> Result<Payment> {
        require_capability(ctx, |p| p.can_manage_payments)?;
        if let Some(amount) = input.amount {
            let mut errs = FieldErrors::new();
            errs.require(amount > 0.0, "amount", "must be positive");
            errs.finish("Invalid payment input")?;
        }
        Ok(db(ctx).update_payment(id, input).await?.into())
    }

    async fn delete_payment(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        require_capability(ctx, |p| p.can_manage_payments)?;
        Ok(db(ctx).delete_payment(id).await?)
    }
}
