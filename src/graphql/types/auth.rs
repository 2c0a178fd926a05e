use super::user::User;
use crate::permissions::Permissions;
use async_graphql::{InputObject, SimpleObject};

#[derive(Debug, InputObject)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Returned by login/register/refreshToken.
#[derive(Debug, SimpleObject)]
pub struct AuthPayload {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// The authenticated principal plus its resolved capability record, so
/// clients gate their UI from the same table the server enforces.
#[derive(Debug, SimpleObject)]
pub struct Viewer {
    pub user: User,
    pub permissions: Permissions,
}
