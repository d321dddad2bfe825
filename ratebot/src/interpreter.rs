//! Turns free text into a validated rate request.
//!
//! Pure: the caller supplies "today"; no state is kept between messages. Whether a reply carries
//! the quick-reply menu follows from the interpretation of that message alone.

use chrono::{Days, NaiveDate};
use lazy_static::lazy_static;
use rate_archive::{Currency, ARCHIVE_DATE_FORMAT};
use regex::Regex;
use thiserror::Error;

/// Command that opens the conversation.
pub const START_COMMAND: &str = "/start";

lazy_static! {
    /// `DD.MM.YYYY`, ASCII digits only, nothing around it.
    static ref DATE_TOKEN_REGEX: Regex =
        Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap();
}

/// A (currency, date) pair that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest {
    pub currency: Currency,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// `/start`: answer with the welcome text and the quick-reply menu.
    Intro,
    Request(ParsedRequest),
}

impl Interpretation {
    /// The reply to this message attaches the quick-reply menu; only the intro does.
    pub fn shows_menu(&self) -> bool {
        matches!(self, Interpretation::Intro)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("date must be DD.MM.YYYY and an existing calendar day")]
    InvalidDate,
    #[error("currency is not supported")]
    InvalidCurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Yesterday,
}

impl RelativeDay {
    fn label(self) -> &'static str {
        match self {
            RelativeDay::Today => "today",
            RelativeDay::Yesterday => "yesterday",
        }
    }

    fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            RelativeDay::Today => Some(today),
            RelativeDay::Yesterday => today.checked_sub_days(Days::new(1)),
        }
    }
}

/// Button text that maps straight to a currency and a day relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedPhrase {
    pub currency: Currency,
    pub day: RelativeDay,
}

impl CannedPhrase {
    /// Every phrase: today and yesterday for each supported currency.
    pub fn all() -> Vec<CannedPhrase> {
        Currency::ALL
            .into_iter()
            .flat_map(|currency| {
                [RelativeDay::Today, RelativeDay::Yesterday]
                    .into_iter()
                    .map(move |day| CannedPhrase { currency, day })
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("Get rate UAH/{} for {}.", self.currency, self.day.label())
    }

    /// Exact, case-sensitive match on the button text.
    pub fn match_text(text: &str) -> Option<CannedPhrase> {
        Self::all().into_iter().find(|p| p.label() == text)
    }
}

/// Quick-reply keyboard: one row per currency, today then yesterday.
pub fn menu_rows() -> Vec<Vec<String>> {
    Currency::ALL
        .into_iter()
        .map(|currency| {
            CannedPhrase::all()
                .into_iter()
                .filter(|p| p.currency == currency)
                .map(|p| p.label())
                .collect()
        })
        .collect()
}

/// Date token in `DD.MM.YYYY` that is also a real day (leap years included).
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    if !DATE_TOKEN_REGEX.is_match(token) {
        return None;
    }
    NaiveDate::parse_from_str(token, ARCHIVE_DATE_FORMAT).ok()
}

pub fn parse_currency(token: &str) -> Option<Currency> {
    Currency::from_token(token)
}

/// The whole message is `/start` or `/start@<bot>`, nothing else.
fn is_start_command(text: &str) -> bool {
    match text.trim().strip_prefix(START_COMMAND) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('@')
            .is_some_and(|bot| !bot.is_empty() && !bot.contains(char::is_whitespace)),
        None => false,
    }
}

/// Interprets one message. Free text uses the first token as currency and the last as date;
/// the date is validated first, so a bad date is reported even when the currency is bad too.
pub fn interpret(text: &str, today: NaiveDate) -> Result<Interpretation, RequestError> {
    if is_start_command(text) {
        return Ok(Interpretation::Intro);
    }

    if let Some(phrase) = CannedPhrase::match_text(text) {
        let date = phrase.day.resolve(today).ok_or(RequestError::InvalidDate)?;
        return Ok(Interpretation::Request(ParsedRequest {
            currency: phrase.currency,
            date,
        }));
    }

    let first = text.split_whitespace().next().unwrap_or_default();
    let last = text.split_whitespace().last().unwrap_or_default();

    let date = parse_date(last).ok_or(RequestError::InvalidDate)?;
    let currency = parse_currency(first).ok_or(RequestError::InvalidCurrency)?;

    Ok(Interpretation::Request(ParsedRequest { currency, date }))
}
