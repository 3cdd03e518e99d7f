//! Reservation domain model.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    model::reservation::ReservationDto,
    server::{
        error::domain::DomainError,
        model::{theme::Theme, time::ReservationTime},
    },
};

/// Wire format for reservation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A booking of a theme at a time slot on a date.
///
/// The reservation name is the booking member's display name. The date is
/// supplied as a `yyyy-MM-dd` string and validated on construction; the name,
/// time slot, and theme are required by construction, so a `Reservation` value
/// is always complete. `id` is `None` until the reservation has been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Option<i32>,
    pub name: String,
    pub date: NaiveDate,
    pub time: ReservationTime,
    pub theme: Theme,
}

impl Reservation {
    /// Creates an unpersisted reservation from a raw date string.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The date matched `yyyy-MM-dd`
    /// - `Err(DomainError::InvalidDateFormat)` - Carrying the offending string
    pub fn new(
        name: String,
        date: &str,
        time: ReservationTime,
        theme: Theme,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: None,
            name,
            date: Self::parse_date(date)?,
            time,
            theme,
        })
    }

    /// Creates a reservation with a known id from a raw date string.
    pub fn with_id(
        id: i32,
        name: String,
        date: &str,
        time: ReservationTime,
        theme: Theme,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: Some(id),
            ..Self::new(name, date, time, theme)?
        })
    }

    /// Assembles a persisted reservation from its already-typed parts.
    ///
    /// Used at the repository boundary where the date comes out of the store
    /// as a typed column and needs no re-validation.
    pub fn from_parts(
        id: i32,
        name: String,
        date: NaiveDate,
        time: ReservationTime,
        theme: Theme,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            date,
            time,
            theme,
        }
    }

    /// Parses a `yyyy-MM-dd` date string.
    pub fn parse_date(date: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| DomainError::InvalidDateFormat {
            value: date.to_string(),
        })
    }

    /// Whether the reserved (date, start time) strictly precedes the reference
    /// instant.
    ///
    /// The date decides first; when the dates are equal the slot's start time
    /// decides, matching calendar semantics.
    pub fn is_before(&self, reference: NaiveDateTime) -> bool {
        self.date.and_time(self.time.start_at) < reference
    }

    /// Converts the reservation to a DTO, rendering the date as `yyyy-MM-dd`.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id.unwrap_or_default(),
            name: self.name,
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.into_dto(),
            theme: self.theme.into_dto(),
        }
    }
}
