//! Reservation time slot domain model.

use chrono::NaiveTime;

use crate::{model::time::ReservationTimeDto, server::error::domain::DomainError};

/// Wire format for slot start times.
pub const START_AT_FORMAT: &str = "%H:%M";

/// A bookable time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationTime {
    pub id: i32,
    pub start_at: NaiveTime,
}

impl ReservationTime {
    /// Creates a time slot from a raw `HH:mm` string.
    ///
    /// # Returns
    /// - `Ok(ReservationTime)` - The start time matched `HH:mm`
    /// - `Err(DomainError::InvalidTimeFormat)` - Carrying the offending string
    pub fn new(id: i32, start_at: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            start_at: Self::parse_start_at(start_at)?,
        })
    }

    /// Parses a `HH:mm` start time string.
    pub fn parse_start_at(start_at: &str) -> Result<NaiveTime, DomainError> {
        NaiveTime::parse_from_str(start_at, START_AT_FORMAT).map_err(|_| {
            DomainError::InvalidTimeFormat {
                value: start_at.to_string(),
            }
        })
    }

    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation_time::Model) -> Self {
        Self {
            id: entity.id,
            start_at: entity.start_at,
        }
    }

    /// Converts the time slot to a DTO, rendering the start time as `HH:mm`.
    pub fn into_dto(self) -> ReservationTimeDto {
        ReservationTimeDto {
            id: self.id,
            start_at: self.start_at.format(START_AT_FORMAT).to_string(),
        }
    }
}
