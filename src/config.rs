use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub default_leave_balance: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),
            default_leave_balance: env::var("DEFAULT_LEAVE_BALANCE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap(),
        }
    }
}
