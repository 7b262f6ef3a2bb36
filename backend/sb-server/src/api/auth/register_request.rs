use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,

    /// Optional display name
    #[serde(default)]
    pub full_name: Option<String>,
}
