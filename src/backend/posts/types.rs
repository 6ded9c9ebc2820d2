use serde::{Deserialize, Serialize};

/// Body of `POST /posts`; the owner comes from the token, never the body
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreatePostRequest {
    pub post_title: String,
    pub post_content: String,
}
