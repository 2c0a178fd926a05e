use actix_web::{get, HttpResponse};
use serde_json::json;

#[get("")]
async fn health(_req: actix_web::HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
