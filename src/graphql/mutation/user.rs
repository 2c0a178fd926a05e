use crate::db::user::NewUser;
use crate::graphql::types::user::{CreateUserInput, UpdateUserInput, User};
use crate::graphql::{db, require_capability};
use crate::types::error::AppError;
use crate::utils::token;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        require_capability(ctx, |p| p.can_manage_users)?;
        let mut errs = FieldErrors::new();
        errs.require_email("email", &input.email);
        errs.require_filled("name", &input.name);
        errs.require(
            input.password.len() >= 8,
            "password",
            "must be at least 8 characters",
        );
        errs.finish("Invalid user input")?;

        if let Some(company_id) = input.company_id {
            db(ctx).get_company(company_id).await?;
        }
        let password_hash = token::hash_password(&input.password)?;
        let user = db(ctx)
            .create_user(NewUser {
                email: input.email,
                name: input.name,
                password_hash,
                role: input.role,
                company_id: input.company_id,
            })
            .await?;
        Ok(user.into())
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User> {
        require_capability(ctx, |p| p.can_manage_users)?;
        if let Some(name) = &input.name {
            let mut errs = FieldErrors::new();
            errs.require_filled("name", name);
            errs.finish("Invalid user input")?;
        }
        if let Some(company_id) = input.company_id {
            db(ctx).get_company(company_id).await?;
        }
        Ok(db(ctx).update_user(id, input).await?.into())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let current = require_capability(ctx, |p| p.can_manage_users)?;
        if current.id == id {
            return Err(AppError::Conflict("cannot delete the authenticated user".into()).into());
        }
        Ok(db(ctx).delete_user(id).await?)
    }
}
