use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserViewModel {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthStatusViewModel {
    pub signed_in: bool,
    pub user: Option<UserViewModel>,
}
