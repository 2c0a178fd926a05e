use crate::config::JwtConfig;
use crate::graphql::{CurrentUser, ParkItSchema};
use crate::utils::token::{self, TokenKind};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Result};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql::Data;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};

/// Decode the bearer token, if any. Invalid or missing credentials leave the
/// request anonymous; resolvers decide whether that is acceptable.
fn bearer_user(req: &HttpRequest, jwt: &JwtConfig) -> Option<CurrentUser> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    decode_bearer(header, jwt)
}

fn decode_bearer(header: &str, jwt: &JwtConfig) -> Option<CurrentUser> {
    let raw = header.strip_prefix("Bearer ")?;
    let claims = token::verify(raw, TokenKind::Access, jwt).ok()?;
    Some(CurrentUser {
        id: claims.sub,
        role: claims.role,
    })
}

/// Browser WebSocket clients cannot set headers, so the token also rides in
/// the `connection_init` payload as `{ "Authorization": "Bearer ..." }`.
fn connection_init_user(payload: &serde_json::Value, jwt: &JwtConfig) -> Option<CurrentUser> {
    let header = payload.get("Authorization")?.as_str()?;
    decode_bearer(header, jwt)
}

#[post("")]
async fn graphql_post(
    schema: web::Data<ParkItSchema>,
    jwt: web::Data<JwtConfig>,
    http_req: HttpRequest,
    gql_req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_req.into_inner();
    if let Some(user) = bearer_user(&http_req, &jwt) {
        request = request.data(user);
    }
    schema.execute(request).await.into()
}

#[get("/ws")]
async fn graphql_ws(
    schema: web::Data<ParkItSchema>,
    jwt: web::Data<JwtConfig>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse> {
    let header_user = bearer_user(&req, &jwt);
    let jwt = jwt.get_ref().clone();
    GraphQLSubscription::new(ParkItSchema::clone(&schema))
        .on_connection_init(move |value| async move {
            let mut data = Data::default();
            if let Some(user) = header_user.or_else(|| connection_init_user(&value, &jwt)) {
                data.insert(user);
            }
            Ok(data)
        })
        .start(&req, payload)
}

#[get("")]
async fn playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(
            GraphQLPlaygroundConfig::new("/graphql").subscription_endpoint("/graphql/ws"),
        ))
}
