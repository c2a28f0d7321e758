use crate::database::{model::event::EventRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{CreateEvent, DeleteEvent, Event, UpdateEvent},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    // 新しいイベントを登録し、採番済みの id を付けて返す
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        let res = sqlx::query(
            r#"
                INSERT INTO event (title, description, date, location)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let CreateEvent {
            title,
            description,
            date,
            location,
        } = event;
        Ok(Event {
            id: EventId::new(res.last_insert_rowid()),
            title,
            description,
            date,
            location,
        })
    }

    // イベント一覧を取得する
    // sorted が true のときはタイトル順、false のときは登録順に並べる
    async fn find_all(&self, sorted: bool) -> AppResult<Vec<Event>> {
        let query = if sorted {
            r#"
                SELECT id, title, description, date, location
                FROM event
                ORDER BY title
            "#
        } else {
            r#"
                SELECT id, title, description, date, location
                FROM event
                ORDER BY id
            "#
        };

        let rows: Vec<EventRow> = sqlx::query_as(query)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
                SELECT id, title, description, date, location
                FROM event
                WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    // id 以外のすべてのフィールドを置き換え、更新後のイベントを返す
    async fn update(&self, event: UpdateEvent) -> AppResult<Event> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"
                UPDATE event
                SET title = $1, description = $2, date = $3, location = $4
                WHERE id = $5
            "#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "event {} not found",
                event.event_id
            )));
        }

        let row: EventRow = sqlx::query_as(
            r#"
                SELECT id, title, description, date, location
                FROM event
                WHERE id = $1
            "#,
        )
        .bind(event.event_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Event::from(row))
    }

    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM event WHERE id = $1
            "#,
        )
        .bind(event.event_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "event {} not found",
                event.event_id
            )));
        }

        Ok(())
    }

    // 全イベントを削除し、削除した件数を返す
    // 1件ずつ DELETE することで、各イベントの登録のカスケード削除を確実に効かせる
    async fn delete_all(&self) -> AppResult<u64> {
        let mut tx = self.db.begin().await?;

        let ids: Vec<EventId> = sqlx::query_scalar(
            r#"
                SELECT id FROM event
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut deleted = 0;
        for id in ids {
            let res = sqlx::query(
                r#"
                    DELETE FROM event WHERE id = $1
                "#,
            )
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            deleted += res.rows_affected();
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(deleted)
    }
}
