use text_post::{
	config::Config,
	database::{connection_pool, create_db_and_tables},
	domain::post::{PostStore, PostStoreWrapper},
	routes::{cors_layer, create_routes},
	services::response::ServiceError,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	let config = Config::new()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Database tables are being created...");
	let pool = connection_pool(&config.database_url).await?;
	create_db_and_tables(&pool).await?;

	let state: PostStoreWrapper = PostStore::seeded().into();

	let app = create_routes(state)
		.layer(cors_layer(&config))
		.layer(TraceLayer::new_for_http());

	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	let listener = TcpListener::bind(config.server_ip_port).await?;
	axum::serve(listener, app).await?;

	Ok(())
}
