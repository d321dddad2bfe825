//! # rate-archive
//!
//! Looks up historical UAH exchange rates in a bank archive.
//!
//! The archive is queried per day: `GET <base-url>&date=DD.MM.YYYY` returns every rate the bank
//! published for that date, and [`ArchiveClient`] picks the record for the requested [`Currency`].
//! "No record for this date" is `Ok(None)`; transport and parse failures are [`ArchiveError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use rate_archive::{ArchiveClient, Currency, RateArchive};
//!
//! async fn example() -> Result<(), rate_archive::ArchiveError> {
//!     let client = ArchiveClient::new("https://api.privatbank.ua/p24api/exchange_rates?json")?;
//!     let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
//!     if let Some(rate) = client.lookup(Currency::Usd, date).await? {
//!         println!("{}: {}/{}", rate.currency, rate.purchase_rate, rate.sale_rate);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod currency;
mod error;
mod model;

pub use client::{ArchiveClient, RateArchive, RetryPolicy};
pub use currency::Currency;
pub use error::ArchiveError;
pub use model::{format_archive_date, ArchiveResponse, ExchangeRate, RateRecord, ARCHIVE_DATE_FORMAT};
