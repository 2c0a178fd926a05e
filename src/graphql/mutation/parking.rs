use crate::graphql::broker::ChangeBroker;
use crate::graphql::types::parking::{CreateParkingInput, Parking, UpdateParkingInput};
use crate::graphql::{db, require_capability};
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct ParkingMutation;

#[Object]
impl ParkingMutation {
    async fn create_parking(
        &self,
        ctx: &Context<'_>,
        input: CreateParkingInput,
    ) -> Result<Parking> {
        require_capability(ctx, |p| p.can_manage_parkings)?;
        let mut errs = FieldErrors::new();
        errs.require_filled("name", &input.name);
        errs.require_filled("address", &input.address);
        errs.require(input.capacity >= 1, "capacity", "must be at least 1");
        errs.require(
            input.price_per_hour >= 0.0,
            "pricePerHour",
            "must not be negative",
        );
        errs.finish("Invalid parking input")?;
        Ok(db(ctx).create_parking(input).await?.into())
    }

    async fn update_parking(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateParkingInput,
    ) -> Result<Parking> {
        require_capability(ctx, |p| p.can_manage_parkings)?;
        let mut errs = FieldErrors::new();
        if let Some(name) = &input.name {
            errs.require_filled("name", name);
        }
        if let Some(capacity) = input.capacity {
            errs.require(capacity >= 1, "capacity", "must be at least 1");
        }
        if let Some(price) = input.price_per_hour {
            errs.require(price >= 0.0, "pricePerHour", "must not be negative");
        }
        errs.finish("Invalid parking input")?;

        let status_changed = input.status.is_some();
        let parking = db(ctx).update_parking(id, input).await?;
        if status_changed {
            ctx.data_unchecked::<ChangeBroker>()
                .publish_parking(parking.clone());
        }
        Ok(parking.into())
    }

    async fn delete_parking(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        require_capability(ctx, |p| p.can_manage_parkings)?;
        Ok(db(ctx).delete_parking(id).await?)
    }
}
