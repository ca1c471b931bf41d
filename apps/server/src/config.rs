/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Config {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("TS_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path = std::env::var("TS_DB_PATH")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "data/tradeshift.db".to_string());
        let jwt_secret = std::env::var("TS_JWT_SECRET").unwrap_or_else(|_| {
            use rand::RngCore;
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            bytes.iter().map(|b| format!("{:02x}", b)).collect()
        });
        let token_ttl_hours = std::env::var("TS_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);
        let cors_origin = std::env::var("TS_CORS_ORIGIN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Config {
            listen_addr,
            db_path,
            jwt_secret,
            token_ttl_hours,
            cors_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_jwt_secret_falls_back_to_ephemeral_hex() {
        std::env::remove_var("TS_JWT_SECRET");
        let config = Config::from_env();
        assert_eq!(config.jwt_secret.len(), 64);
        assert!(config.jwt_secret.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
