//! Service Seams
//!
//! Abstract interfaces the delete workflow depends on.
//! Browser-backed implementations live in `api` and `dialogs`.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Post, RecordId};

/// Admin posts backend
#[async_trait(?Send)]
pub trait PostApi {
    /// Fetch every post shown in the admin list
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// Delete a post, bypassing any HTTP cache
    async fn delete_post(&self, id: &RecordId) -> ApiResult<()>;
}

/// Blocking confirmation and notification prompts
pub trait Dialogs {
    /// Ask a yes/no question. `false` also covers "could not ask".
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}
