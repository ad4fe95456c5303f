use crate::domain::post::{
	entity::PostId,
	schemas::{PostCreate, PostListing, PostResponse},
	Limit, PostStoreWrapper,
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	/// A positive limit returns that many posts in insertion order, a negative
	/// one every post except the last `|limit|`. A zero limit returns every
	/// post keyed by id.
	pub async fn list_posts(
		limit: Limit,
		state: PostStoreWrapper,
	) -> Result<PostListing, ServiceError> {
		let store = state.read().await;
		let listing = match limit {
			Limit::First(_) | Limit::AllButLast(_) => PostListing::Page(store.list(limit).into_iter().map(PostResponse::from).collect()),
			Limit::All => PostListing::All(store.iter().map(|(id, post)| (*id, post.into())).collect()),
		};
		tracing::debug!(?limit, count = listing.len(), "listing posts");
		Ok(listing)
	}

	pub async fn get_post(
		id: PostId,
		state: PostStoreWrapper,
	) -> Result<PostResponse, ServiceError> {
		let store = state.read().await;
		let post = store.get(&id).ok_or_else(|| {
			tracing::debug!(id, "post not found");
			ServiceError::EntityNotFound
		})?;
		Ok(post.into())
	}

	pub async fn create_post(
		cmd: PostCreate,
		state: PostStoreWrapper,
	) -> Result<PostResponse, ServiceError> {
		let mut store = state.write().await;
		let post = store.insert(cmd.title, cmd.content);
		tracing::info!(id = post.id, "post created");
		Ok(post.into())
	}
}

#[cfg(test)]
mod test {
	use crate::{
		domain::post::{
			schemas::{PostCreate, PostListing, PostResponse},
			Limit, PostStore, PostStoreWrapper,
		},
		services::{handlers::PostHandler, response::ServiceError},
	};

	fn seeded_state() -> PostStoreWrapper {
		PostStore::seeded().into()
	}

	#[tokio::test]
	async fn test_list_posts_with_limit() {
		let listing = PostHandler::list_posts(Limit::from(4), seeded_state()).await.unwrap();
		let PostListing::Page(posts) = listing else {
			panic!("Expected a page of posts")
		};
		assert_eq!(posts.len(), 4);
		assert_eq!(posts[0].title, "New Post");
		assert_eq!(posts[3].title, "Web Development");
	}

	#[tokio::test]
	async fn test_list_posts_with_zero_limit_returns_whole_store() {
		let listing = PostHandler::list_posts(Limit::from(0), seeded_state()).await.unwrap();
		let PostListing::All(posts) = listing else {
			panic!("Expected the whole store")
		};
		assert_eq!(posts.len(), 10);
		assert_eq!(posts[&7].title, "Testing Guide");
	}

	#[tokio::test]
	async fn test_get_missing_post() {
		let err = PostHandler::get_post(42, seeded_state()).await.unwrap_err();
		assert!(matches!(err, ServiceError::EntityNotFound));
	}

	#[tokio::test]
	async fn test_create_then_get() {
		'_given: {
			let state = seeded_state();
			let cmd = PostCreate {
				title: "X".to_string(),
				content: "Y".to_string(),
			};

			'_when: {
				let created = PostHandler::create_post(cmd, state.clone()).await.unwrap();

				'_then: {
					let expected = PostResponse {
						title: "X".to_string(),
						content: "Y".to_string(),
					};
					assert_eq!(created, expected);
					assert_eq!(PostHandler::get_post(11, state.clone()).await.unwrap(), expected);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_create_on_empty_store() {
		let state: PostStoreWrapper = PostStore::new().into();
		let cmd = PostCreate {
			title: "first".to_string(),
			content: "post".to_string(),
		};
		PostHandler::create_post(cmd, state.clone()).await.unwrap();

		assert_eq!(PostHandler::get_post(1, state).await.unwrap().title, "first");
	}
}
