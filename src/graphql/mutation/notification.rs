use crate::db::notification::NewNotification;
use crate::graphql::broker::ChangeBroker;
use crate::graphql::types::notification::{
    CreateNotificationInput, Notification, UpdateNotificationInput,
};
use crate::graphql::{current_user, db, require_capability};
use crate::types::error::AppError;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use entity::sea_orm_active_enums::NotificationPriority;
use uuid::Uuid;

#[derive(Default)]
pub struct NotificationMutation;

#[Object]
impl NotificationMutation {
    async fn create_notification(
        &self,
        ctx: &Context<'_>,
        input: CreateNotificationInput,
    ) -> Result<Notification> {
        require_capability(ctx, |p| p.can_manage_events)?;
        let mut errs = FieldErrors::new();
        errs.require_filled("title", &input.title);
        errs.require_filled("message", &input.message);
        errs.finish("Invalid notification input")?;

        let notification = db(ctx)
            .create_notification(NewNotification {
                user_id: input.user_id,
                title: input.title,
                message: input.message,
                notification_type: input.notification_type,
                priority: input.priority.unwrap_or(NotificationPriority::Medium),
                action_url: input.action_url,
            })
            .await?;
        ctx.data_unchecked::<ChangeBroker>()
            .publish_notification(notification.clone());
        Ok(notification.into())
    }

    async fn update_notification(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateNotificationInput,
    ) -> Result<Notification> {
        require_capability(ctx, |p| p.can_manage_events)?;
        let mut errs = FieldErrors::new();
        if let Some(title) = &input.title {
            errs.require_filled("title", title);
        }
        if let Some(message) = &input.message {
            errs.require_filled("message", message);
        }
        errs.finish("Invalid notification input")?;
        Ok(db(ctx).update_notification(id, input).await?.into())
    }

    /// Recipients flip their own read flag; nobody else can.
    async fn mark_notification_read(&self, ctx: &Context<'_>, id: Uuid) -> Result<Notification> {
        let current = current_user(ctx)?;
        let notification = db(ctx).get_notification(id).await?;
        if notification.user_id != current.id {
            return Err(AppError::Forbidden("not the notification recipient".into()).into());
        }
        Ok(db(ctx).mark_notification_read(id).await?.into())
    }

    async fn delete_notification(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let current = current_user(ctx)?;
        let notification = db(ctx).get_notification(id).await?;
        if notification.user_id != current.id && !current.permissions().can_manage_events {
            return Err(AppError::Forbidden("role does not grant this operation".into()).into());
        }
        Ok(db(ctx).delete_notification(id).await?)
    }
}
