use crate::database::{is_unique_violation, model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::user::{CreateUser, DeleteUser, User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // 新しいユーザーを登録する
    // username は主キーなので、重複した場合は Conflict を返す
    async fn create(&self, user: CreateUser) -> AppResult<User> {
        let res = sqlx::query(
            r#"
                INSERT INTO user (username, name, email)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.email)
        .execute(self.db.inner_ref())
        .await;

        match res {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::ResourceConflict(format!(
                    "user {} already exists",
                    user.username
                )));
            }
            Err(e) => return Err(AppError::SpecificOperationError(e)),
        }

        let CreateUser {
            username,
            name,
            email,
        } = user;
        Ok(User {
            username,
            name,
            email,
        })
    }

    // ユーザー一覧を取得する
    // sorted が true のときは username 順、false のときは登録順に並べる
    async fn find_all(&self, sorted: bool) -> AppResult<Vec<User>> {
        let query = if sorted {
            r#"
                SELECT username, name, email
                FROM user
                ORDER BY username
            "#
        } else {
            r#"
                SELECT username, name, email
                FROM user
                ORDER BY rowid
            "#
        };

        let rows: Vec<UserRow> = sqlx::query_as(query)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT username, name, email
                FROM user
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, user: DeleteUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM user WHERE username = $1
            "#,
        )
        .bind(&user.username)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user {} not found",
                user.username
            )));
        }

        Ok(())
    }

    // 全ユーザーを削除し、削除した件数を返す
    // 1件ずつ DELETE することで、各ユーザーの登録のカスケード削除を確実に効かせる
    async fn delete_all(&self) -> AppResult<u64> {
        let mut tx = self.db.begin().await?;

        let usernames: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT username FROM user
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut deleted = 0;
        for username in usernames {
            let res = sqlx::query(
                r#"
                    DELETE FROM user WHERE username = $1
                "#,
            )
            .bind(&username)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            deleted += res.rows_affected();
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(deleted)
    }
}
