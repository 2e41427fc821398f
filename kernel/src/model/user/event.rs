pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
