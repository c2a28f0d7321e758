use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{CreateEvent, Event, UpdateEvent},
    id::EventId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(skip)]
    pub location: String,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            title,
            description,
            date,
            location,
        } = value;
        CreateEvent {
            title,
            description,
            date,
            location,
        }
    }
}

// PUT は部分更新ではなく全フィールドの置き換え
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(skip)]
    pub location: String,
}

#[derive(new)]
pub struct UpdateEventRequestWithId(EventId, UpdateEventRequest);

impl From<UpdateEventRequestWithId> for UpdateEvent {
    fn from(value: UpdateEventRequestWithId) -> Self {
        let UpdateEventRequestWithId(
            event_id,
            UpdateEventRequest {
                title,
                description,
                date,
                location,
            },
        ) = value;
        UpdateEvent {
            event_id,
            title,
            description,
            date,
            location,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            title,
            description,
            date,
            location,
        } = value;
        Self {
            id,
            title,
            description,
            date,
            location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub sort: bool,
}
