pub type PostId = i64;

#[derive(Debug)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}
