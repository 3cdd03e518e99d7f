use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationTimeDto {
    /// Start time in `HH:mm` format.
    pub start_at: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReservationTimeDto {
    pub id: i32,
    /// Start time in `HH:mm` format.
    pub start_at: String,
}
