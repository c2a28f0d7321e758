use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::EventId,
    registration::{CreateRegistration, Registration},
};

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    // ユーザーをイベントに登録する。登録済みの組は Conflict
    async fn register(&self, registration: CreateRegistration) -> AppResult<Registration>;
    async fn find(&self, username: &str, event_id: EventId) -> AppResult<Option<Registration>>;
}
