use chrono::{Days, NaiveDate, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::member::Member,
    service::reservation::ReservationService,
};

mod create_reservation;

/// Formats a date the way request bodies carry it.
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A date far enough in the future to always pass the past-date guard.
fn future_date() -> NaiveDate {
    Utc::now().date_naive() + Days::new(30)
}
