use crate::model::user::{CreateUserRequest, UserListQuery, UserResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::user::DeleteUser;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn add_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|_| (StatusCode::CREATED, Json("user created")))
}

pub async fn show_user_list(
    Query(query): Query<UserListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserResponse>>> {
    registry
        .user_repository()
        .find_all(query.sort)
        .await
        .map(|users| users.into_iter().map(UserResponse::from).collect())
        .map(Json)
}

pub async fn show_user(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_username(&username)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!(
                "user {username} not found"
            ))),
        })
}

pub async fn delete_user(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<&'static str>> {
    let delete_user = DeleteUser { username };
    registry
        .user_repository()
        .delete(delete_user)
        .await
        .map(|_| Json("user deleted"))
}

pub async fn delete_all_users(State(registry): State<AppRegistry>) -> AppResult<Json<String>> {
    registry
        .user_repository()
        .delete_all()
        .await
        .map(|deleted| {
            tracing::info!(deleted, "all users deleted");
            Json(format!("deleted {deleted} users"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{event::build_event_routers, user::build_user_routers};
    use adapter::database::ConnectionPool;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::json;

    fn test_server(pool: sqlx::SqlitePool) -> TestServer {
        let registry = AppRegistry::new(ConnectionPool::new(pool));
        let app = Router::new()
            .merge(build_event_routers())
            .merge(build_user_routers())
            .with_state(registry);
        TestServer::new(app).unwrap()
    }

    fn user_body(username: &str) -> serde_json::Value {
        json!({
            "username": username,
            "name": "Test Name",
            "email": format!("{username}@example.com"),
        })
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_user_crud_over_http(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        let res = server.post("/users/").json(&user_body("marco")).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
        assert_eq!(res.json::<String>(), "user created");

        let res = server.get("/users/marco").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        let fetched: UserResponse = res.json();
        assert_eq!(fetched.username, "marco");
        assert_eq!(fetched.email, "marco@example.com");

        let res = server.get("/users/nobody").await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

        let res = server.delete("/users/marco").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.json::<String>(), "user deleted");

        let res = server.delete("/users/marco").await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_username_over_http(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        let res = server.post("/users/").json(&user_body("marco")).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);

        let res = server.post("/users/").json(&user_body("marco")).await;
        assert_eq!(res.status_code(), StatusCode::CONFLICT);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_user_list_orderings(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        for username in ["zoe", "anna", "mario"] {
            let res = server.post("/users/").json(&user_body(username)).await;
            assert_eq!(res.status_code(), StatusCode::CREATED);
        }

        let res = server.get("/users/").await;
        let users: Vec<UserResponse> = res.json();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["zoe", "anna", "mario"]);

        let res = server.get("/users/").add_query_param("sort", true).await;
        let users: Vec<UserResponse> = res.json();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["anna", "mario", "zoe"]);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_delete_all_users_over_http(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        for username in ["anna", "mario"] {
            let res = server.post("/users/").json(&user_body(username)).await;
            assert_eq!(res.status_code(), StatusCode::CREATED);
        }

        let res = server.delete("/users/").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.json::<String>(), "deleted 2 users");

        let res = server.get("/users/").await;
        assert!(res.json::<Vec<UserResponse>>().is_empty());
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_user_validation(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        let res = server
            .post("/users/")
            .json(&json!({
                "username": "marco",
                "name": "Test Name",
                "email": "not-an-email",
            }))
            .await;
        assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = server
            .post("/users/")
            .json(&json!({ "username": "marco" }))
            .await;
        assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_deleting_user_frees_registrations_over_http(pool: sqlx::SqlitePool) {
        let server = test_server(pool);

        let res = server.post("/users/").json(&user_body("marco")).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
        let res = server
            .post("/events/")
            .json(&json!({
                "title": "RustConf",
                "description": "Test Description",
                "date": "2026-03-01T18:00:00Z",
                "location": "Test Location",
            }))
            .await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
        let event: crate::model::event::EventResponse = res.json();

        let res = server
            .post(&format!("/events/{}/register", event.id))
            .json(&json!({ "username": "marco" }))
            .await;
        assert_eq!(res.status_code(), StatusCode::CREATED);

        // ユーザー削除で登録もカスケード削除される
        let res = server.delete("/users/marco").await;
        assert_eq!(res.status_code(), StatusCode::OK);

        // 同じ username を作り直すと、再登録が Conflict にならず成功する
        let res = server.post("/users/").json(&user_body("marco")).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);

        let res = server
            .post(&format!("/events/{}/register", event.id))
            .json(&json!({ "username": "marco" }))
            .await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }
}
