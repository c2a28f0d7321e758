use derive_new::new;

use crate::model::id::EventId;

#[derive(Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub event_id: EventId,
}

#[derive(new, Debug)]
pub struct CreateRegistration {
    pub username: String,
    pub event_id: EventId,
}
