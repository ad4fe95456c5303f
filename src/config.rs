use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::services::response::ServiceError;

pub struct Config {
	/// Default tracing directive when `RUST_LOG` is unset
	pub log_level: String,

	/// Address the server is listening on
	pub server_ip_port: SocketAddr,
	pub database_url: String,
	pub allow_origins: Vec<HeaderValue>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT")
			.unwrap_or("127.0.0.1:8000".into())
			.parse::<SocketAddr>()
			.map_err(|err| ServiceError::ConfigError(format!("SERVER_IP_PORT: {}", err)))?;
		let database_url = lookup("DATABASE_URL").unwrap_or("sqlite://posts.db?mode=rwc".to_string());
		let allow_origins = lookup("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000,http://localhost:5173".to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|err| ServiceError::ConfigError(format!("ALLOW_ORIGINS: {}", err)))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			allow_origins,
		})
	}
}
