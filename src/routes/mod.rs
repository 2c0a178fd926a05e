use actix_web::web;

pub mod graphql;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/graphql")
            .service(graphql::graphql_ws)
            .service(graphql::graphql_post)
            .service(graphql::playground),
    );
}
