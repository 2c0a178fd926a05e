use crate::db::notification::NewNotification;
use crate::db::reservation::NewReservation;
use crate::graphql::broker::ChangeBroker;
use crate::graphql::types::reservation::{
    CreateReservationInput, Reservation, UpdateReservationInput,
};
use crate::graphql::{db, require_capability};
use crate::types::error::AppError;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    NotificationPriority, NotificationType, ParkingStatus, ReservationStatus,
};
use uuid::Uuid;

/// Fractional hours times the hourly rate, rounded to cents.
fn derive_price(start: DateTime<Utc>, end: DateTime<Utc>, price_per_hour: f64) -> f64 {
    let hours = (end - start).num_minutes() as f64 / 60.0;
    (hours * price_per_hour * 100.0).round() / 100.0
}

fn validate_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    let mut errs = FieldErrors::new();
    errs.require(end > start, "endTime", "must be after startTime");
    errs.finish("Invalid reservation time range")
}

#[derive(Default)]
pub struct ReservationMutation;

#[Object]
impl ReservationMutation {
    async fn create_reservation(
        &self,
        ctx: &Context<'_>,
        input: CreateReservationInput,
    ) -> Result<Reservation> {
        let current = require_capability(ctx, |p| p.can_create_reservations)?;
        let user_id = input.user_id.unwrap_or(current.id);
        if user_id != current.id && !current.permissions().can_manage_reservations {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        validate_time_range(input.start_time, input.end_time)?;

        let vehicle = db(ctx).get_vehicle(input.vehicle_id).await?;
        if vehicle.user_id != user_id && !current.permissions().can_manage_reservations {
            return Err(AppError::Forbidden("vehicle belongs to another user".into()).into());
        }
        let parking = db(ctx).get_parking(input.parking_id).await?;
        if matches!(
            parking.status,
            ParkingStatus::Maintenance | ParkingStatus::Disabled
        ) {
            return Err(AppError::Conflict("parking is not open for reservations".into()).into());
        }

        let total_price = input
            .total_price
            .unwrap_or_else(|| derive_price(input.start_time, input.end_time, parking.price_per_hour));

        let reservation = db(ctx)
            .create_reservation(NewReservation {
                user_id,
                vehicle_id: vehicle.id,
                parking_id: parking.id,
                company_id: parking.company_id,
                start_time: input.start_time,
                end_time: input.end_time,
                total_price,
            })
            .await?;

        let broker = ctx.data_unchecked::<ChangeBroker>();
        broker.publish_reservation(reservation.clone());
        if let Ok(notification) = db(ctx)
            .create_notification(NewNotification {
                user_id,
                title: "Reservation created".into(),
                message: format!("Your spot at {} is booked.", parking.name),
                notification_type: NotificationType::Success,
                priority: NotificationPriority::Medium,
                action_url: None,
            })
            .await
        {
            broker.publish_notification(notification);
        }
        Ok(reservation.into())
    }

    async fn update_reservation(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateReservationInput,
    ) -> Result<Reservation> {
        require_capability(ctx, |p| p.can_manage_reservations)?;
        let existing = db(ctx).get_reservation(id).await?;
        let start = input.start_time.unwrap_or(existing.start_time);
        let end = input.end_time.unwrap_or(existing.end_time);
        validate_time_range(start, end)?;

        let reservation = db(ctx).update_reservation(id, input).await?;
        ctx.data_unchecked::<ChangeBroker>()
            .publish_reservation(reservation.clone());
        Ok(reservation.into())
    }

    async fn cancel_reservation(&self, ctx: &Context<'_>, id: Uuid) -> Result<Reservation> {
        let current = require_capability(ctx, |p| p.can_cancel_reservations)?;
        let existing = db(ctx).get_reservation(id).await?;
        if existing.user_id != current.id && !current.permissions().can_manage_reservations {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        if matches!(
            existing.status,
            ReservationStatus::Completed | ReservationStatus::Cancelled
        ) {
            return Err(AppError::Conflict("reservation is already finished".into()).into());
        }

        let reservation = db(ctx)
            .set_reservation_status(id, ReservationStatus::Cancelled)
            .await?;
        let broker = ctx.data_unchecked::<ChangeBroker>();
        broker.publish_reservation(reservation.clone());
        if let Ok(notification) = db(ctx)
            .create_notification(NewNotification {
                user_id: reservation.user_id,
                title: "Reservation cancelled".into(),
                message: "Your reservation was cancelled.".into(),
                notification_type: NotificationType::Warning,
                priority: NotificationPriority::Medium,
                action_url: None,
            })
            .await
        {
            broker.publish_notification(notification);
        }
        Ok(reservation.into())
    }

    async fn delete_reservation(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        require_capability(ctx, |p| p.can_manage_reservations)?;
        Ok(db(ctx).delete_reservation(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_hours_times_rate() {
        let start = Utc::now();
        let end = start + chrono::Duration::hours(3);
        assert_eq!(derive_price(start, end, 2.5), 7.5);
    }

    #[test]
    fn price_rounds_to_cents() {
        let start = Utc::now();
        let end = start + chrono::Duration::minutes(90);
        assert_eq!(derive_price(start, end, 3.33), 5.0);
    }

    #[test]
    fn inverted_range_is_a_validation_error() {
        let start = Utc::now();
        let err = validate_time_range(start, start - chrono::Duration::minutes(1)).unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details.contains_key("endTime"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
