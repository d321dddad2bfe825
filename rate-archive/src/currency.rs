//! Currencies the archive is queried for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of supported currencies. Add a variant (and its code) to support another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// Canonical code, as it appears in the archive's `currency` field.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Matches a user token: the uppercased token must equal a code exactly. No trimming, no partial matches.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_uppercase();
        Self::ALL.into_iter().find(|c| c.code() == upper)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
