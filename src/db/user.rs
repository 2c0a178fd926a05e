use crate::db::postgres_service::PostgresService;
use crate::graphql::types::user::UpdateUserInput;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

/// Db-level payload: the password has already been hashed by the caller.
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
}

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User not found".into()))?)
    }

    /// Lookup for the login flow: an unknown email is not an error here, the
    /// caller turns it into an authentication failure.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn create_user(&self, payload: NewUser) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        Ok(UserActive {
            id: Set(new_id()),
            email: Set(payload.email),
            name: Set(payload.name),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            company_id: Set(payload.company_id),
            is_active: Set(true),
            is_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn list_users(
        &self,
        company_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserModel>, u64), AppError> {
        let mut finder = User::find().order_by_desc(entity::user::Column::CreatedAt);
        if let Some(cid) = company_id {
            finder = finder.filter(entity::user::Column::CompanyId.eq(cid));
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&id).await?.into();
        if let Some(name) = input.name {
            am.name = Set(name);
        }
        if let Some(role) = input.role {
            am.role = Set(role);
        }
        if let Some(company_id) = input.company_id {
            am.company_id = Set(Some(company_id));
        }
        if let Some(is_active) = input.is_active {
            am.is_active = Set(is_active);
        }
        if let Some(is_verified) = input.is_verified {
            am.is_verified = Set(is_verified);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<bool, AppError> {
        let res = User::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".into()));
        }
        Ok(true)
    }
}
