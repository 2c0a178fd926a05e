use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// The password hash never leaves the db layer.
impl From<entity::user::Model> for User {
    fn from(m: entity::user::Model) -> Self {
        User {
            id: m.id,
            email: m.email,
            name: m.name,
            role: m.role,
            company_id: m.company_id,
            is_active: m.is_active,
            is_verified: m.is_verified,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateUserInput {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
}

#[derive(Debug, InputObject)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub company_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}
