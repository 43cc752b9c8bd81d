use std::env;
use tokio::sync::OnceCell;

#[derive(Debug)]
struct ServerConfig {
    host: String,
    port: u16,
}

#[derive(Debug)]
struct DatabaseConfig {
    url: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

#[derive(Debug)]
pub struct Config {
    server: ServerConfig,
    db: DatabaseConfig,
    jwt: JwtConfig,
}

impl Config {
    pub fn db_url(&self) -> &str {
        &self.db.url
    }

    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    pub fn server_port(&self) -> u16 {
        self.server.port
    }

    pub fn jwt(&self) -> &JwtConfig {
        &self.jwt
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::const_new();

async fn init_config() -> Config {
    let server_config = ServerConfig {
        host: env::var("HOST").unwrap_or_else(|_| String::from("0.0.0.0")),
        port: env::var("PORT")
            .unwrap_or_else(|_| String::from("3000"))
            .parse::<u16>()
            .expect("PORT must be a valid port number"),
    };

    let database_config = DatabaseConfig {
        url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
    };

    let jwt_config = JwtConfig {
        secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
        access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| String::from("3600"))
            .parse::<i64>()
            .expect("JWT_ACCESS_EXPIRY must be a valid number"),
        refresh_token_expiry: env::var("JWT_REFRESH_EXPIRY")
            .unwrap_or_else(|_| String::from("604800"))
            .parse::<i64>()
            .expect("JWT_REFRESH_EXPIRY must be a valid number"),
    };

    Config {
        server: server_config,
        db: database_config,
        jwt: jwt_config,
    }
}

pub async fn config() -> &'static Config {
    // Get the configuration from the OnceCell or initialize it if it hasn't been set yet
    CONFIG.get_or_init(init_config).await
}
