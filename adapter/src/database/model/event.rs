use kernel::model::{event::Event, id::EventId};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            id,
            title,
            description,
            date,
            location,
        } = value;
        Event {
            id,
            title,
            description,
            date,
            location,
        }
    }
}
