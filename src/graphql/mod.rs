use crate::config::JwtConfig;
use crate::db::postgres_service::PostgresService;
use crate::permissions::Permissions;
use crate::types::error::AppError;
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Schema};
use entity::sea_orm_active_enums::UserRole;
use std::sync::Arc;
use uuid::Uuid;

pub mod broker;
pub mod mutation;
pub mod query;
pub mod subscription;
pub mod types;

use broker::ChangeBroker;
use mutation::MutationRoot;
use query::QueryRoot;
use subscription::SubscriptionRoot;

pub type ParkItSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(db: Arc<PostgresService>, broker: ChangeBroker, jwt: JwtConfig) -> ParkItSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(db)
    .data(broker)
    .data(jwt)
    .finish()
}

/// The authenticated principal, decoded from the access token by the HTTP
/// layer and injected as request data. Absent for anonymous requests.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn permissions(&self) -> Permissions {
        Permissions::for_role(Some(self.role))
    }
}

pub(crate) fn db<'a>(ctx: &Context<'a>) -> &'a Arc<PostgresService> {
    ctx.data_unchecked::<Arc<PostgresService>>()
}

pub(crate) fn current_user<'a>(ctx: &Context<'a>) -> Result<&'a CurrentUser, AppError> {
    ctx.data_opt::<CurrentUser>().ok_or(AppError::Unauthorized)
}

/// Auth + capability gate used by most resolvers.
pub(crate) fn require_capability<'a>(
    ctx: &Context<'a>,
    capability: fn(&Permissions) -> bool,
) -> Result<&'a CurrentUser, AppError> {
    let user = current_user(ctx)?;
    if capability(&user.permissions()) {
        Ok(user)
    } else {
        Err(AppError::Forbidden(
            "role does not grant this operation".into(),
        ))
    }
}

const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;

/// Normalize `page`/`limit` arguments; out-of-range values are validation
/// errors keyed by argument name, matching the mutation input convention.
pub(crate) fn page_args(page: Option<u64>, limit: Option<u64>) -> Result<(u64, u64), AppError> {
    let page = page.unwrap_or(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let mut errs = FieldErrors::new();
    errs.require(page >= 1, "page", "must be at least 1");
    errs.require(
        (1..=MAX_LIMIT).contains(&limit),
        "limit",
        "must be between 1 and 100",
    );
    errs.finish("Invalid pagination arguments")?;
    Ok((page, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_args_defaults() {
        assert_eq!(page_args(None, None).unwrap(), (1, DEFAULT_LIMIT));
    }

    #[test]
    fn page_args_rejects_out_of_range() {
        assert!(page_args(Some(0), None).is_err());
        assert!(page_args(None, Some(0)).is_err());
        assert!(page_args(None, Some(MAX_LIMIT + 1)).is_err());
        assert_eq!(page_args(Some(3), Some(MAX_LIMIT)).unwrap(), (3, MAX_LIMIT));
    }
}
