use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::health::build_health_check_routers;
    use adapter::database::ConnectionPool;
    use axum::Router;
    use axum_test::TestServer;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_health_endpoints(pool: sqlx::SqlitePool) {
        let registry = AppRegistry::new(ConnectionPool::new(pool));
        let app = Router::new()
            .merge(build_health_check_routers())
            .with_state(registry);
        let server = TestServer::new(app).unwrap();

        let res = server.get("/health").await;
        assert_eq!(res.status_code(), StatusCode::OK);

        let res = server.get("/health/db").await;
        assert_eq!(res.status_code(), StatusCode::OK);
    }
}
