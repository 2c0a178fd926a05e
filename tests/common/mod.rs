use entity::sea_orm_active_enums::UserRole;
use parkit::config::JwtConfig;
use parkit::db::postgres_service::PostgresService;
use parkit::db::user::NewUser;
use parkit::graphql::broker::ChangeBroker;
use parkit::graphql::{build_schema, CurrentUser, ParkItSchema};
use parkit::utils::token::hash_password;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub schema: ParkItSchema,
    pub broker: ChangeBroker,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        let broker = ChangeBroker::new();
        let schema = build_schema(Arc::clone(&db), broker.clone(), get_test_jwt());

        TestContext {
            db,
            schema,
            broker,
            _container: container,
        }
    }

    /// Insert a user directly and return the principal the HTTP layer would
    /// have produced for it.
    pub async fn seed_user(&self, email: &str, role: UserRole) -> CurrentUser {
        let user = self
            .db
            .create_user(NewUser {
                email: email.to_string(),
                name: "Test User".to_string(),
                password_hash: hash_password("password123").expect("hash"),
                role,
                company_id: None,
            })
            .await
            .expect("Failed to seed user");
        CurrentUser {
            id: user.id,
            role: user.role,
        }
    }

    /// Run a query or mutation, optionally as an authenticated user, and
    /// return the whole response serialized to JSON.
    pub async fn exec(&self, query: &str, user: Option<CurrentUser>) -> serde_json::Value {
        let mut request = async_graphql::Request::new(query);
        if let Some(u) = user {
            request = request.data(u);
        }
        let response = self.schema.execute(request).await;
        serde_json::to_value(&response).expect("Failed to serialize response")
    }
}

pub fn get_test_jwt() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_ttl_minutes: 15,
        refresh_ttl_days: 30,
    }
}

pub fn error_code(resp: &serde_json::Value) -> &str {
    resp["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or("")
}
