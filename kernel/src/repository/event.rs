use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    event::{CreateEvent, DeleteEvent, Event, UpdateEvent},
    id::EventId,
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    // 新しいイベントを登録し、採番済みのイベントを返す
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    // イベント一覧を取得する。sorted でタイトル順に並べ替える
    async fn find_all(&self, sorted: bool) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // id 以外のすべてのフィールドを置き換える
    async fn update(&self, event: UpdateEvent) -> AppResult<Event>;
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
    // 全イベントを1件ずつ削除し、削除件数を返す
    async fn delete_all(&self) -> AppResult<u64>;
}
