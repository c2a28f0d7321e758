use derive_new::new;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub email: String,
}

#[derive(new, Debug)]
pub struct CreateUser {
    pub username: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct DeleteUser {
    pub username: String,
}
