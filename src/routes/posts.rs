use axum::{
	extract::{
		rejection::{JsonRejection, PathRejection, QueryRejection},
		Path, Query, State,
	},
	Json,
};

use crate::{
	domain::post::{
		entity::PostId,
		schemas::{ListParams, PostCreate, PostListing, PostResponse},
		PostStoreWrapper,
	},
	services::{handlers::PostHandler, response::ServiceError},
};

pub async fn list_posts(
	State(state): State<PostStoreWrapper>,
	params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PostListing>, ServiceError> {
	let Query(params) = params?;
	PostHandler::list_posts(params.limit.into(), state).await.map(Json)
}

pub async fn get_post(
	State(state): State<PostStoreWrapper>,
	id: Result<Path<PostId>, PathRejection>,
) -> Result<Json<PostResponse>, ServiceError> {
	let Path(id) = id?;
	PostHandler::get_post(id, state).await.map(Json)
}

pub async fn create_post(
	State(state): State<PostStoreWrapper>,
	post: Result<Json<PostCreate>, JsonRejection>,
) -> Result<Json<PostResponse>, ServiceError> {
	let Json(post) = post?;
	PostHandler::create_post(post, state).await.map(Json)
}
