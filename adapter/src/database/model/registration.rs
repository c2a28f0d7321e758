use kernel::model::{id::EventId, registration::Registration};

// 登録は (username, event_id) の組そのもので、固有のカラムを持たない
#[derive(sqlx::FromRow)]
pub struct RegistrationRow {
    pub username: String,
    pub event_id: EventId,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow { username, event_id } = value;
        Registration { username, event_id }
    }
}
