pub mod charts;
pub mod classify;
pub mod entries;
pub mod health;
pub mod photos;

use axum::extract::FromRequest;
use chrono::{Local, NaiveDate};

use crate::error::AppError;

/// `Json` whose rejections are reported through `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// The user's calendar day. Entry dates and chart cutoffs are local dates.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
