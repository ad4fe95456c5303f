use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{Post, PostId};

/// Request body of `POST /post`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostCreate {
	pub title: String,
	pub content: String,
}

/// Public shape of a post. The id is deliberately left out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostResponse {
	pub title: String,
	pub content: String,
}

impl From<&Post> for PostResponse {
	fn from(value: &Post) -> Self {
		Self {
			title: value.title.clone(),
			content: value.content.clone(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
	pub limit: i64,
}

/// Output of the list operation.
///
/// A nonzero limit yields a plain array; a zero limit yields the whole store
/// as an object keyed by id.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PostListing {
	Page(Vec<PostResponse>),
	All(BTreeMap<PostId, PostResponse>),
}

impl PostListing {
	pub fn len(&self) -> usize {
		match self {
			Self::Page(posts) => posts.len(),
			Self::All(posts) => posts.len(),
		}
	}
}

#[test]
fn test_listing_representation() {
	let page = PostListing::Page(vec![PostResponse {
		title: "T".to_string(),
		content: "C".to_string(),
	}]);
	assert_eq!(serde_json::to_value(&page).unwrap(), serde_json::json!([{"title": "T", "content": "C"}]));

	let all = PostListing::All(BTreeMap::from([(
		3,
		PostResponse {
			title: "T".to_string(),
			content: "C".to_string(),
		},
	)]));
	assert_eq!(serde_json::to_value(&all).unwrap(), serde_json::json!({"3": {"title": "T", "content": "C"}}));
}
