use crate::db::event::NewEvent;
use crate::graphql::broker::ChangeBroker;
use crate::graphql::types::event::{CreateEventInput, Event, UpdateEventInput};
use crate::graphql::{db, require_capability};
use crate::types::error::AppError;
use async_graphql::{Context, Object, Result};
use chrono::Utc;
use entity::sea_orm_active_enums::{EventType, ParkingStatus, ReservationStatus};
use uuid::Uuid;

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    /// Record a gate event. ENTRY and EXIT flip the parking status and, when
    /// linked, move the reservation through ACTIVE/COMPLETED; both changes
    /// are pushed to subscribers.
    async fn create_event(&self, ctx: &Context<'_>, input: CreateEventInput) -> Result<Event> {
        let current = require_capability(ctx, |p| p.can_scan_qr || p.can_manage_events)?;
        // A cited reservation must match the scanned vehicle and parking, and
        // a finished reservation cannot be driven by the gates.
        if let Some(rid) = input.reservation_id {
            let reservation = db(ctx).get_reservation(rid).await?;
            if reservation.parking_id != input.parking_id
                || reservation.vehicle_id != input.vehicle_id
            {
                return Err(AppError::Conflict(
                    "reservation does not match this vehicle and parking".into(),
                )
                .into());
            }
            if matches!(input.event_type, EventType::Entry | EventType::Exit)
                && matches!(
                    reservation.status,
                    ReservationStatus::Completed | ReservationStatus::Cancelled
                )
            {
                return Err(AppError::Conflict("reservation is already finished".into()).into());
            }
        }
        let event = db(ctx)
            .create_event(NewEvent {
                event_type: input.event_type,
                user_id: current.id,
                vehicle_id: input.vehicle_id,
                parking_id: input.parking_id,
                reservation_id: input.reservation_id,
                gate: input.gate,
                qr_code: input.qr_code,
                timestamp: input.timestamp.unwrap_or_else(Utc::now),
            })
            .await?;

        let broker = ctx.data_unchecked::<ChangeBroker>();
        match event.event_type {
            EventType::Entry => {
                let parking = db(ctx)
                    .set_parking_status(event.parking_id, ParkingStatus::Occupied)
                    .await?;
                broker.publish_parking(parking);
                if let Some(rid) = event.reservation_id {
                    let reservation = db(ctx)
                        .set_reservation_status(rid, ReservationStatus::Active)
                        .await?;
                    broker.publish_reservation(reservation);
                }
            }
            EventType::Exit => {
                let parking = db(ctx)
                    .set_parking_status(event.parking_id, ParkingStatus::Available)
                    .await?;
                broker.publish_parking(parking);
                if let Some(rid) = event.reservation_id {
                    let reservation = db(ctx)
                        .set_reservation_status(rid, ReservationStatus::Completed)
                        .await?;
                    broker.publish_reservation(reservation);
                }
            }
            // Plain scans and violations are audit records only.
            EventType::Scan | EventType::Violation => {}
        }
        Ok(event.into())
    }

    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateEventInput,
    ) -> Result<Event> {
        require_capability(ctx, |p| p.can_manage_events)?;
        Ok(db(ctx).update_event(id, input).await?.into())
    }

    async fn delete_event(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        require_capability(ctx, |p| p.can_manage_events)?;
        Ok(db(ctx).delete_event(id).await?)
    }
}
