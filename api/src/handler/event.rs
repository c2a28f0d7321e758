use crate::model::event::{
    CreateEventRequest, EventListQuery, EventResponse, UpdateEventRequest,
    UpdateEventRequestWithId,
};
use crate::model::registration::RegisterRequest;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{event::DeleteEvent, id::EventId, registration::CreateRegistration};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn add_event(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    req.validate(&())?;

    registry
        .event_repository()
        .create(req.into())
        .await
        .map(|event| (StatusCode::CREATED, Json(event.into())))
}

pub async fn show_event_list(
    Query(query): Query<EventListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all(query.sort)
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(Json)
}

pub async fn show_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound(format!(
                "event {event_id} not found"
            ))),
        })
}

pub async fn register_user_for_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    req.validate(&())?;

    registry
        .registration_repository()
        .register(CreateRegistration::new(req.username, event_id))
        .await
        .map(|_| (StatusCode::CREATED, Json("user registered")))
}

pub async fn update_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEventRequest>,
) -> AppResult<Json<&'static str>> {
    req.validate(&())?;

    let update_event = UpdateEventRequestWithId::new(event_id, req);
    registry
        .event_repository()
        .update(update_event.into())
        .await
        .map(|_| Json("event updated"))
}

pub async fn delete_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<&'static str>> {
    let delete_event = DeleteEvent { event_id };
    registry
        .event_repository()
        .delete(delete_event)
        .await
        .map(|_| Json("event deleted"))
}

pub async fn delete_all_events(State(registry): State<AppRegistry>) -> AppResult<Json<String>> {
    registry
        .event_repository()
        .delete_all()
        .await
        .map(|deleted| {
            tracing::info!(deleted, "all events deleted");
            Json(format!("deleted {deleted} events"))
        })
}
