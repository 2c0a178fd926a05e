use crate::graphql::broker::ChangeBroker;
use crate::graphql::types::notification::Notification;
use crate::graphql::types::parking::Parking;
use crate::graphql::types::reservation::Reservation;
use crate::graphql::{current_user, db};
use crate::types::error::AppError;
use async_graphql::{Context, Result, Subscription};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

/// Live change feeds. Each stream starts empty; only events published after
/// the subscription is established are delivered. The same visibility rules
/// as the corresponding queries apply at subscribe time.
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    async fn parking_status_changed(
        &self,
        ctx: &Context<'_>,
        parking_id: Uuid,
    ) -> Result<impl Stream<Item = Parking>> {
        current_user(ctx)?;
        let rx = ctx.data_unchecked::<ChangeBroker>().subscribe_parkings();
        Ok(BroadcastStream::new(rx).filter_map(move |item| {
            futures_util::future::ready(match item {
                Ok(model) if model.id == parking_id => Some(model.into()),
                _ => None,
            })
        }))
    }

    async fn reservation_updated(
        &self,
        ctx: &Context<'_>,
        reservation_id: Uuid,
    ) -> Result<impl Stream<Item = Reservation>> {
        let current = current_user(ctx)?;
        let reservation = db(ctx).get_reservation(reservation_id).await?;
        if reservation.user_id != current.id && !current.permissions().can_view_all_reservations {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        let rx = ctx.data_unchecked::<ChangeBroker>().subscribe_reservations();
        Ok(BroadcastStream::new(rx).filter_map(move |item| {
            futures_util::future::ready(match item {
                Ok(model) if model.id == reservation_id => Some(model.into()),
                _ => None,
            })
        }))
    }

    async fn notification_created(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
    ) -> Result<impl Stream<Item = Notification>> {
        let current = current_user(ctx)?;
        if user_id != current.id && !current.permissions().can_manage_events {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        let rx = ctx
            .data_unchecked::<ChangeBroker>()
            .subscribe_notifications();
        Ok(BroadcastStream::new(rx).filter_map(move |item| {
            futures_util::future::ready(match item {
                Ok(model) if model.user_id == user_id => Some(model.into()),
                _ => None,
            })
        }))
    }
}
