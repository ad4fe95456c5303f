mod posts;

use axum::{
	http::{header, Method},
	routing::{get, post},
	Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{config::Config, domain::post::PostStoreWrapper};

use self::posts::{create_post, get_post, list_posts};

pub fn create_routes(state: PostStoreWrapper) -> Router {
	Router::new()
		.route("/health", get(health_check))
		.route("/posts", get(list_posts))
		.route("/posts/:id", get(get_post))
		.route("/post", post(create_post))
		.with_state(state)
}

/// Browsers send JSON bodies to `/post`, so preflights must admit `content-type`.
pub fn cors_layer(config: &Config) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(config.allow_origins.clone()))
		.allow_methods([Method::GET, Method::POST])
		.allow_headers([header::CONTENT_TYPE])
}

async fn health_check() -> &'static str {
	"OK"
}
