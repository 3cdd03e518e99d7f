use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /login`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}
