//! Post Endpoints

use async_trait::async_trait;

use super::{fetch, read_json};
use crate::error::ApiResult;
use crate::models::{Post, RecordId};
use crate::routes;
use crate::services::PostApi;

/// `PostApi` over the browser `fetch` API
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPostApi {
    posts_api: String,
}

impl HttpPostApi {
    pub fn new(posts_api: impl Into<String>) -> Self {
        Self { posts_api: posts_api.into() }
    }
}

#[async_trait(?Send)]
impl PostApi for HttpPostApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = fetch("GET", &self.posts_api).await?;
        read_json(response).await
    }

    async fn delete_post(&self, id: &RecordId) -> ApiResult<()> {
        let url = routes::admin_post_api(&self.posts_api, id);
        fetch("DELETE", &url).await?;
        Ok(())
    }
}
