use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateThemeDto {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}
