use serde::{Deserialize, Serialize};

use crate::model::{theme::ThemeDto, time::ReservationTimeDto};

/// Body of `POST /reservations`. The booking member is taken from the session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    /// Reservation date in `yyyy-MM-dd` format.
    pub date: String,
    pub time_id: i32,
    pub theme_id: i32,
}

/// Body of `POST /admin/reservations`, naming the member explicitly.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateReservationDto {
    /// Reservation date in `yyyy-MM-dd` format.
    pub date: String,
    pub member_id: i32,
    pub time_id: i32,
    pub theme_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    /// Display name of the booking member.
    pub name: String,
    /// Reservation date in `yyyy-MM-dd` format.
    pub date: String,
    pub time: ReservationTimeDto,
    pub theme: ThemeDto,
}
