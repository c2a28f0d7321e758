use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::EventId;

#[derive(Debug, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

#[derive(new, Debug)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

#[derive(new, Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
}
