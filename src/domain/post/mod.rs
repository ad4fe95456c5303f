pub mod entity;
pub mod schemas;

use std::{
	collections::BTreeMap,
	num::NonZeroUsize,
	ops::Deref,
	sync::Arc,
};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use self::entity::{Post, PostId};

const SEED_POSTS: [(&str, &str); 10] = [
	("New Post", "This is my new post"),
	("Python Tips", "Learn Python the easy way"),
	("FastAPI Tutorial", "Building REST APIs with FastAPI"),
	("Web Development", "Modern web development practices"),
	("Database Design", "Best practices for database design"),
	("API Security", "Securing your REST APIs"),
	("Testing Guide", "How to write effective tests"),
	("Docker Basics", "Containerizing your applications"),
	("Cloud Deployment", "Deploying apps to the cloud"),
	("Performance Optimization", "Making your code faster"),
];

/// How many posts a listing should return.
///
/// A negative limit counts from the end: every post except the last `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
	All,
	First(NonZeroUsize),
	AllButLast(NonZeroUsize),
}

impl From<i64> for Limit {
	fn from(value: i64) -> Self {
		let magnitude = usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX);
		match NonZeroUsize::new(magnitude) {
			None => Self::All,
			Some(n) if value > 0 => Self::First(n),
			Some(n) => Self::AllButLast(n),
		}
	}
}

/// In-memory post store keyed by id.
///
/// Ids are handed out from `next_id`, which always stays one above the
/// largest id in the map, so iteration order is insertion order.
#[derive(Debug)]
pub struct PostStore {
	posts: BTreeMap<PostId, Post>,
	next_id: PostId,
}

impl Default for PostStore {
	fn default() -> Self {
		Self {
			posts: BTreeMap::new(),
			next_id: 1,
		}
	}
}

impl PostStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store holding the ten seed posts, ids 1 through 10.
	pub fn seeded() -> Self {
		let mut store = Self::new();
		for (title, content) in SEED_POSTS {
			store.insert(title, content);
		}
		store
	}

	pub fn list(
		&self,
		limit: Limit,
	) -> Vec<&Post> {
		match limit {
			Limit::All => self.posts.values().collect(),
			Limit::First(n) => self.posts.values().take(n.get()).collect(),
			Limit::AllButLast(n) => self.posts.values().take(self.posts.len().saturating_sub(n.get())).collect(),
		}
	}

	pub fn insert(
		&mut self,
		title: impl Into<String>,
		content: impl Into<String>,
	) -> &Post {
		let id = self.next_id;
		self.next_id += 1;
		self.posts.entry(id).or_insert(Post::new(id, title, content))
	}

	pub fn next_id(&self) -> PostId {
		self.next_id
	}
}

impl Deref for PostStore {
	type Target = BTreeMap<PostId, Post>;
	fn deref(&self) -> &Self::Target {
		&self.posts
	}
}

#[derive(Clone, Debug)]
pub struct PostStoreWrapper(pub Arc<RwLock<PostStore>>);
impl From<Arc<RwLock<PostStore>>> for PostStoreWrapper {
	fn from(value: Arc<RwLock<PostStore>>) -> Self {
		Self(value)
	}
}
impl From<PostStore> for PostStoreWrapper {
	fn from(value: PostStore) -> Self {
		Arc::new(RwLock::new(value)).into()
	}
}
impl PostStoreWrapper {
	pub async fn read(&self) -> RwLockReadGuard<'_, PostStore> {
		self.0.read().await
	}
	pub async fn write(&self) -> RwLockWriteGuard<'_, PostStore> {
		self.0.write().await
	}
}
