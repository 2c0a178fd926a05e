use crate::db::vehicle::NewVehicle;
use crate::graphql::types::vehicle::{CreateVehicleInput, UpdateVehicleInput, Vehicle};
use crate::graphql::{current_user, db};
use crate::types::error::AppError;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct VehicleMutation;

#[Object]
impl VehicleMutation {
    async fn create_vehicle(
        &self,
        ctx: &Context<'_>,
        input: CreateVehicleInput,
    ) -> Result<Vehicle> {
        let current = current_user(ctx)?;
        let owner = input.user_id.unwrap_or(current.id);
        if owner != current.id && !current.permissions().can_manage_vehicles {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        let mut errs = FieldErrors::new();
        errs.require_filled("licensePlate", &input.license_plate);
        errs.require_filled("make", &input.make);
        errs.require_filled("model", &input.model);
        errs.require(
            (1900..=2100).contains(&input.year),
            "year",
            "must be a plausible model year",
        );
        errs.finish("Invalid vehicle input")?;

        let vehicle = db(ctx)
            .create_vehicle(NewVehicle {
                license_plate: input.license_plate,
                make: input.make,
                model: input.model,
                year: input.year,
                color: input.color,
                user_id: owner,
            })
            .await?;
        Ok(vehicle.into())
    }

    async fn update_vehicle(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateVehicleInput,
    ) -> Result<Vehicle> {
        let current = current_user(ctx)?;
        let vehicle = db(ctx).get_vehicle(id).await?;
        if vehicle.user_id != current.id && !current.permissions().can_manage_vehicles {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        let mut errs = FieldErrors::new();
        if let Some(plate) = &input.license_plate {
            errs.require_filled("licensePlate", plate);
        }
        if let Some(year) = input.year {
            errs.require(
                (1900..=2100).contains(&year),
                "year",
                "must be a plausible model year",
            );
        }
        errs.finish("Invalid vehicle input")?;
        Ok(db(ctx).update_vehicle(id, input).await?.into())
    }

    async fn delete_vehicle(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let current = current_user(ctx)?;
        let vehicle = db(ctx).get_vehicle(id).await?;
        if vehicle.user_id != current.id && !current.permissions().can_manage_vehicles {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(db(ctx).delete_vehicle(id).await?)
    }
}
