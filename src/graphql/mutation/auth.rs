use crate::config::JwtConfig;
use crate::db::user::NewUser;
use crate::graphql::types::auth::{AuthPayload, LoginInput, RegisterInput};
use crate::graphql::{current_user, db};
use crate::types::error::AppError;
use crate::utils::token::{self, TokenKind};
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use entity::sea_orm_active_enums::UserRole;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Self-service signup; new accounts always start as CLIENT.
    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> Result<AuthPayload> {
        let jwt = ctx.data_unchecked::<JwtConfig>();
        let mut errs = FieldErrors::new();
        errs.require_email("email", &input.email);
        errs.require_filled("name", &input.name);
        errs.require(
            input.password.len() >= 8,
            "password",
            "must be at least 8 characters",
        );
        errs.finish("Invalid registration input")?;

        let password_hash = token::hash_password(&input.password)?;
        let user = db(ctx)
            .create_user(NewUser {
                email: input.email,
                name: input.name,
                password_hash,
                role: UserRole::Client,
                company_id: None,
            })
            .await?;
        let (access_token, refresh_token) = token::issue_pair(user.id, user.role, jwt)?;
        Ok(AuthPayload {
            user: user.into(),
            access_token,
            refresh_token,
        })
    }

    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<AuthPayload> {
        let jwt = ctx.data_unchecked::<JwtConfig>();
        // Unknown email and bad password are indistinguishable on purpose.
        let user = db(ctx)
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AppError::Unauthorized)?;
        if !user.is_active || !token::verify_password(&input.password, &user.password_hash) {
            return Err(AppError::Unauthorized.into());
        }
        let (access_token, refresh_token) = token::issue_pair(user.id, user.role, jwt)?;
        Ok(AuthPayload {
            user: user.into(),
            access_token,
            refresh_token,
        })
    }

    /// Exchange a refresh token for a fresh pair. The role is re-read from
    /// the database so revoked or demoted accounts drop out on refresh.
    async fn refresh_token(&self, ctx: &Context<'_>, token: String) -> Result<AuthPayload> {
        let jwt = ctx.data_unchecked::<JwtConfig>();
        let claims = token::verify(&token, TokenKind::Refresh, jwt)?;
        let user = db(ctx)
            .get_user_by_id(&claims.sub)
            .await
            .map_err(|_| AppError::Unauthorized)?;
        if !user.is_active {
            return Err(AppError::Unauthorized.into());
        }
        let (access_token, refresh_token) = token::issue_pair(user.id, user.role, jwt)?;
        Ok(AuthPayload {
            user: user.into(),
            access_token,
            refresh_token,
        })
    }

    /// No-op placeholder for parity with clients that call it; token state
    /// is client-side only.
    async fn logout(&self, ctx: &Context<'_>) -> Result<bool> {
        current_user(ctx)?;
        Ok(true)
    }
}
