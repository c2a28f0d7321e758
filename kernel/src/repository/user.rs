use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::user::{CreateUser, DeleteUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // 新しいユーザーを登録する。username 重複は Conflict
    async fn create(&self, user: CreateUser) -> AppResult<User>;
    // ユーザー一覧を取得する。sorted で username 順に並べ替える
    async fn find_all(&self, sorted: bool) -> AppResult<Vec<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn delete(&self, user: DeleteUser) -> AppResult<()>;
    // 全ユーザーを1件ずつ削除し、削除件数を返す
    async fn delete_all(&self) -> AppResult<u64>;
}
