use kernel::model::user::User;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub username: String,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            username,
            name,
            email,
        } = value;
        User {
            username,
            name,
            email,
        }
    }
}
