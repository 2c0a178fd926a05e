use super::types::auth::Viewer;
use super::types::company::Company;
use super::types::event::Event;
use super::types::notification::Notification;
use super::types::page::{Page, PageInfo};
use super::types::parking::Parking;
use super::types::payment::Payment;
use super::types::reservation::Reservation;
use super::types::user::User;
use super::types::vehicle::Vehicle;
use super::{current_user, db, page_args, require_capability};
use crate::types::error::AppError;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated user plus its resolved capability record.
    async fn me(&self, ctx: &Context<'_>) -> Result<Viewer> {
        let current = current_user(ctx)?;
        let user = db(ctx).get_user_by_id(&current.id).await?;
        Ok(Viewer {
            user: user.into(),
            permissions: current.permissions(),
        })
    }

    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<User> {
        let current = current_user(ctx)?;
        if current.id != id && !current.permissions().can_manage_users {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(db(ctx).get_user_by_id(&id).await?.into())
    }

    async fn users(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        company_id: Option<Uuid>,
    ) -> Result<Page<User>> {
        require_capability(ctx, |p| p.can_manage_users)?;
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_users(company_id, page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn company(&self, ctx: &Context<'_>, id: Uuid) -> Result<Company> {
        current_user(ctx)?;
        Ok(db(ctx).get_company(id).await?.into())
    }

    async fn companies(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Page<Company>> {
        require_capability(ctx, |p| p.can_manage_companies)?;
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_companies(page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn vehicle(&self, ctx: &Context<'_>, id: Uuid) -> Result<Vehicle> {
        let current = current_user(ctx)?;
        let vehicle = db(ctx).get_vehicle(id).await?;
        if vehicle.user_id != current.id && !current.permissions().can_manage_vehicles {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(vehicle.into())
    }

    async fn vehicles(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        user_id: Option<Uuid>,
    ) -> Result<Page<Vehicle>> {
        let current = current_user(ctx)?;
        let filter = if current.permissions().can_manage_vehicles {
            user_id
        } else {
            // Non-managers only ever see their own vehicles.
            match user_id {
                Some(uid) if uid != current.id => {
                    return Err(
                        AppError::Forbidden("role does not grant this operation".into()).into(),
                    )
                }
                _ => Some(current.id),
            }
        };
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_vehicles(filter, page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn parking(&self, ctx: &Context<'_>, id: Uuid) -> Result<Parking> {
        current_user(ctx)?;
        Ok(db(ctx).get_parking(id).await?.into())
    }

    async fn parkings(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        company_id: Option<Uuid>,
    ) -> Result<Page<Parking>> {
        current_user(ctx)?;
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_parkings(company_id, page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn reservation(&self, ctx: &Context<'_>, id: Uuid) -> Result<Reservation> {
        let current = current_user(ctx)?;
        let reservation = db(ctx).get_reservation(id).await?;
        if reservation.user_id != current.id && !current.permissions().can_view_all_reservations {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(reservation.into())
    }

    async fn reservations(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        company_id: Option<Uuid>,
        user_id: Option<Uuid>,
    ) -> Result<Page<Reservation>> {
        let current = current_user(ctx)?;
        let permissions = current.permissions();
        let (company_filter, user_filter) = if permissions.can_view_all_reservations {
            (company_id, user_id)
        } else if permissions.can_view_own_reservations {
            (company_id, Some(current.id))
        } else {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        };
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx)
            .list_reservations(company_filter, user_filter, page, limit)
            .await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn payment(&self, ctx: &Context<'_>, id: Uuid) -> Result<Payment> {
        let current = current_user(ctx)?;
        let payment = db(ctx).get_payment(id).await?;
        if payment.user_id != current.id && !current.permissions().can_manage_payments {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(payment.into())
    }

    async fn payments(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        user_id: Option<Uuid>,
    ) -> Result<Page<Payment>> {
        let current = current_user(ctx)?;
        let filter = if current.permissions().can_manage_payments {
            user_id
        } else {
            match user_id {
                Some(uid) if uid != current.id => {
                    return Err(
                        AppError::Forbidden("role does not grant this operation".into()).into(),
                    )
                }
                _ => Some(current.id),
            }
        };
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_payments(filter, page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn event(&self, ctx: &Context<'_>, id: Uuid) -> Result<Event> {
        require_capability(ctx, |p| p.can_manage_events || p.can_view_reports)?;
        Ok(db(ctx).get_event(id).await?.into())
    }

    async fn events(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        parking_id: Option<Uuid>,
        user_id: Option<Uuid>,
    ) -> Result<Page<Event>> {
        require_capability(ctx, |p| p.can_manage_events || p.can_view_reports)?;
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx)
            .list_events(parking_id, user_id, page, limit)
            .await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }

    async fn notification(&self, ctx: &Context<'_>, id: Uuid) -> Result<Notification> {
        let current = current_user(ctx)?;
        let notification = db(ctx).get_notification(id).await?;
        if notification.user_id != current.id && !current.permissions().can_manage_events {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(notification.into())
    }

    async fn notifications(
        &self,
        ctx: &Context<'_>,
        page: Option<u64>,
        limit: Option<u64>,
        user_id: Option<Uuid>,
    ) -> Result<Page<Notification>> {
        let current = current_user(ctx)?;
        let filter = if current.permissions().can_manage_events {
            user_id
        } else {
            match user_id {
                Some(uid) if uid != current.id => {
                    return Err(
                        AppError::Forbidden("role does not grant this operation".into()).into(),
                    )
                }
                _ => Some(current.id),
            }
        };
        let (page, limit) = page_args(page, limit)?;
        let (items, total) = db(ctx).list_notifications(filter, page, limit).await?;
        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            PageInfo::new(page, limit, total),
        ))
    }
}
