//! Archive wire format and the rate value extracted from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::Currency;

/// Day format used by the archive and accepted from users (`DD.MM.YYYY`).
pub const ARCHIVE_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_archive_date(date: NaiveDate) -> String {
    date.format(ARCHIVE_DATE_FORMAT).to_string()
}

/// Purchase and sale rate of one currency against UAH on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub currency: Currency,
    pub purchase_rate: Decimal,
    pub sale_rate: Decimal,
}

/// Body of an archive response for one date. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<Vec<RateRecord>>,
}

/// One row of `exchangeRate`. The base-currency row has no `currency`, and
/// some currencies only carry the national-bank rates, so everything is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub purchase_rate: Option<Decimal>,
    #[serde(default)]
    pub sale_rate: Option<Decimal>,
}

impl ArchiveResponse {
    pub fn records(&self) -> &[RateRecord] {
        self.exchange_rate.as_deref().unwrap_or_default()
    }

    /// First record whose `currency` equals the canonical code (case-sensitive).
    /// A matching record without both rates counts as no data.
    pub fn find(&self, currency: Currency) -> Option<ExchangeRate> {
        let record = self
            .records()
            .iter()
            .find(|r| r.currency.as_deref() == Some(currency.code()))?;

        Some(ExchangeRate {
            currency,
            purchase_rate: record.purchase_rate?,
            sale_rate: record.sale_rate?,
        })
    }
}
