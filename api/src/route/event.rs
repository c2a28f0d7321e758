use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::event::{
    add_event, delete_all_events, delete_event, register_user_for_event, show_event,
    show_event_list, update_event,
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let event_routers = Router::new()
        .route("/", post(add_event))
        .route("/", get(show_event_list))
        .route("/", delete(delete_all_events))
        .route("/:event_id", get(show_event))
        .route("/:event_id", put(update_event))
        .route("/:event_id", delete(delete_event))
        .route("/:event_id/register", post(register_user_for_event));

    Router::new().nest("/events", event_routers)
}
