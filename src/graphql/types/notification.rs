use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationPriority, NotificationType};
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::notification::Model> for Notification {
    fn from(m: entity::notification::Model) -> Self {
        Notification {
            id: m.id,
            user_id: m.user_id,
            title: m.title,
            message: m.message,
            notification_type: m.notification_type,
            priority: m.priority,
            is_read: m.is_read,
            action_url: m.action_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateNotificationInput {
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    /// Defaults to MEDIUM.
    pub priority: Option<NotificationPriority>,
    pub action_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdateNotificationInput {
    pub title: Option<String>,
    pub message: Option<String>,
    pub priority: Option<NotificationPriority>,
    pub action_url: Option<String>,
}
