//! Renders a lookup outcome into reply text.

use rate_archive::ExchangeRate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::interpreter::RequestError;
use crate::templates::{MessageTemplates, TemplateKey};

/// Everything a message can end in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Intro,
    IncorrectFormat,
    InvalidDate,
    InvalidCurrency,
    EmptyAnswer,
    ServiceUnavailable,
    Success(ExchangeRate),
}

impl From<RequestError> for Outcome {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::InvalidDate => Outcome::InvalidDate,
            RequestError::InvalidCurrency => Outcome::InvalidCurrency,
        }
    }
}

impl Outcome {
    /// Template for non-success outcomes.
    pub fn template_key(&self) -> Option<TemplateKey> {
        match self {
            Outcome::Intro => Some(TemplateKey::Intro),
            Outcome::IncorrectFormat => Some(TemplateKey::IncorrectFormat),
            Outcome::InvalidDate => Some(TemplateKey::IncorrectDate),
            Outcome::InvalidCurrency => Some(TemplateKey::IncorrectCurrency),
            Outcome::EmptyAnswer => Some(TemplateKey::EmptyAnswer),
            Outcome::ServiceUnavailable => Some(TemplateKey::ServiceUnavailable),
            Outcome::Success(_) => None,
        }
    }
}

/// Rounds half away from zero and pins the scale so `28` prints as `28.00`.
fn two_decimals(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// `Exchange rates  USD: 26.75/27.15 грн.` (two spaces after "rates").
pub fn format_rate(rate: &ExchangeRate) -> String {
    format!(
        "Exchange rates  {}: {}/{} грн.",
        rate.currency,
        two_decimals(rate.purchase_rate),
        two_decimals(rate.sale_rate)
    )
}

pub fn format_reply(templates: &MessageTemplates, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success(rate) => format_rate(rate),
        other => other
            .template_key()
            .map(|key| templates.get(key).to_string())
            .unwrap_or_default(),
    }
}
