use crate::db::postgres_service::PostgresService;
use crate::graphql::types::notification::UpdateNotificationInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::notification::{
    ActiveModel as NotificationActive, Entity as Notification, Model as NotificationModel,
};
use entity::sea_orm_active_enums::{NotificationPriority, NotificationType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

pub struct NewNotification {
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub action_url: Option<String>,
}

impl PostgresService {
    pub async fn create_notification(
        &self,
        payload: NewNotification,
    ) -> Result<NotificationModel, AppError> {
        self.get_user_by_id(&payload.user_id).await?;
        let now = Utc::now();
        Ok(NotificationActive {
            id: Set(new_id()),
            user_id: Set(payload.user_id),
            title: Set(payload.title),
            message: Set(payload.message),
            notification_type: Set(payload.notification_type),
            priority: Set(payload.priority),
            is_read: Set(false),
            action_url: Set(payload.action_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_notification(&self, id: Uuid) -> Result<NotificationModel, AppError> {
        Ok(Notification::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Notification not found".into()))?)
    }

    pub async fn list_notifications(
        &self,
        user_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<NotificationModel>, u64), AppError> {
        let mut finder =
            Notification::find().order_by_desc(entity::notification::Column::CreatedAt);
        if let Some(uid) = user_id {
            finder = finder.filter(entity::notification::Column::UserId.eq(uid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_notification(
        &self,
        id: Uuid,
        input: UpdateNotificationInput,
    ) -> Result<NotificationModel, AppError> {
        let mut am: NotificationActive = self.get_notification(id).await?.into();
        if let Some(title) = input.title {
            am.title = Set(title);
        }
        if let Some(message) = input.message {
            am.message = Set(message);
        }
        if let Some(priority) = input.priority {
            am.priority = Set(priority);
        }
        if let Some(action_url) = input.action_url {
            am.action_url = Set(Some(action_url));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> Result<NotificationModel, AppError> {
        let mut am: NotificationActive = self.get_notification(id).await?.into();
        am.is_read = Set(true);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_notification(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Notification::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Notification not found".into()));
        }
        Ok(true)
    }
}
