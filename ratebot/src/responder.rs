//! Message → reply pipeline: interpret, look up, format.

use chrono::{NaiveDate, Utc};
use rate_archive::RateArchive;
use ratebot_core::{Message, Reply};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::formatter::{format_reply, Outcome};
use crate::interpreter::{interpret, Interpretation, RequestError};
use crate::templates::MessageTemplates;

/// Source of "today" for relative requests.
pub type Clock = fn() -> NaiveDate;

/// Current date in Kyiv, the archive's local day.
pub fn kyiv_today() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Europe::Kyiv).date_naive()
}

pub struct Responder {
    archive: Arc<dyn RateArchive>,
    templates: Arc<MessageTemplates>,
    clock: Clock,
}

impl Responder {
    pub fn new(archive: Arc<dyn RateArchive>, templates: Arc<MessageTemplates>) -> Self {
        Self {
            archive,
            templates,
            clock: kyiv_today,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Answers one message. Depends only on the message and today's date, so chats share nothing.
    /// Never fails: every problem ends in a template reply.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn respond(&self, message: &Message) -> Reply {
        let (outcome, show_menu) = if message.is_text() {
            let interpretation = interpret(&message.content, (self.clock)());
            let show_menu = interpretation.as_ref().is_ok_and(Interpretation::shows_menu);
            (self.resolve(interpretation).await, show_menu)
        } else {
            debug!(kind = ?message.kind, "Non-text message");
            (Outcome::IncorrectFormat, false)
        };

        let text = format_reply(&self.templates, &outcome);
        if show_menu {
            Reply::with_menu(text)
        } else {
            Reply::to_message(text, &message.id)
        }
    }

    async fn resolve(&self, interpretation: Result<Interpretation, RequestError>) -> Outcome {
        let request = match interpretation {
            Ok(Interpretation::Intro) => return Outcome::Intro,
            Ok(Interpretation::Request(request)) => request,
            Err(e) => {
                debug!(error = %e, "Request rejected");
                return e.into();
            }
        };

        match self.archive.lookup(request.currency, request.date).await {
            Ok(Some(rate)) => Outcome::Success(rate),
            Ok(None) => Outcome::EmptyAnswer,
            Err(e) => {
                error!(
                    error = %e,
                    currency = %request.currency,
                    date = %request.date,
                    "Archive lookup failed"
                );
                Outcome::ServiceUnavailable
            }
        }
    }
}
