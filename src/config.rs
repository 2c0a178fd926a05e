use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt: JwtConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");
        let secret: String = Self::get_env("JWT_SECRET");

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            db_url,
            jwt: JwtConfig {
                secret,
                access_ttl_minutes: env::var("ACCESS_TOKEN_TTL_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
                refresh_ttl_days: env::var("REFRESH_TOKEN_TTL_DAYS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },
        }
    }
}
