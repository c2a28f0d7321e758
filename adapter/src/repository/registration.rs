use crate::database::{is_unique_violation, model::registration::RegistrationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::EventId,
    registration::{CreateRegistration, Registration},
};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    // ユーザーをイベントに登録する
    async fn register(&self, registration: CreateRegistration) -> AppResult<Registration> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下をこの順に調べる。
        // - 指定のイベント ID をもつイベントが存在するか
        // - 指定の username をもつユーザーが存在するか
        // - 同じ組み合わせの登録がまだ存在しないか
        //
        // 上記すべてが Yes だった場合、このブロック以降の処理に進む
        {
            let event_row: Option<EventId> = sqlx::query_scalar(
                r#"
                    SELECT id FROM event WHERE id = $1
                "#,
            )
            .bind(registration.event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if event_row.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "event {} not found",
                    registration.event_id
                )));
            }

            let user_row: Option<String> = sqlx::query_scalar(
                r#"
                    SELECT username FROM user WHERE username = $1
                "#,
            )
            .bind(&registration.username)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if user_row.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "user {} not found",
                    registration.username
                )));
            }

            let existing: Option<String> = sqlx::query_scalar(
                r#"
                    SELECT username FROM registration
                    WHERE username = $1 AND event_id = $2
                "#,
            )
            .bind(&registration.username)
            .bind(registration.event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if existing.is_some() {
                return Err(AppError::ResourceConflict(format!(
                    "user {} is already registered for event {}",
                    registration.username, registration.event_id
                )));
            }
        }

        let res = sqlx::query(
            r#"
                INSERT INTO registration (username, event_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(&registration.username)
        .bind(registration.event_id)
        .execute(&mut *tx)
        .await;

        match res {
            Ok(done) if done.rows_affected() < 1 => {
                return Err(AppError::NoRowsAffectedError(
                    "No registration record has been created".into(),
                ));
            }
            Ok(_) => {}
            // 同じ組の同時リクエストは事前チェックをすり抜けることがある。
            // その場合は複合主キーの一意制約違反を Conflict として返す
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::ResourceConflict(format!(
                    "user {} is already registered for event {}",
                    registration.username, registration.event_id
                )));
            }
            Err(e) => return Err(AppError::SpecificOperationError(e)),
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        let CreateRegistration { username, event_id } = registration;
        Ok(Registration { username, event_id })
    }

    async fn find(&self, username: &str, event_id: EventId) -> AppResult<Option<Registration>> {
        let row: Option<RegistrationRow> = sqlx::query_as(
            r#"
                SELECT username, event_id
                FROM registration
                WHERE username = $1 AND event_id = $2
            "#,
        )
        .bind(username)
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Registration::from))
    }
}
