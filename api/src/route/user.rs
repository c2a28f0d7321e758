use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{add_user, delete_all_users, delete_user, show_user, show_user_list};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", post(add_user))
        .route("/", get(show_user_list))
        .route("/", delete(delete_all_users))
        .route("/:username", get(show_user))
        .route("/:username", delete(delete_user));

    Router::new().nest("/users", user_routers)
}
