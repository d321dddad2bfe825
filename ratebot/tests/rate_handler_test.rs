//! Integration tests for the rate pipeline: RateHandler + Responder,
//! with a mocked [`RateArchive`] and a recording [`Bot`].

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use handler_chain::HandlerChain;
use mockall::mock;
use mockall::predicate::eq;
use rate_archive::{ArchiveError, Currency, ExchangeRate, RateArchive};
use ratebot::{LoggingHandler, MessageTemplates, RateHandler, Responder, TemplateKey};
use ratebot_core::{Bot, BotError, Chat, Handler, HandlerResponse, Message, MessageKind, Reply, User};
use rust_decimal::Decimal;

mock! {
    pub Archive {}

    #[async_trait]
    impl RateArchive for Archive {
        async fn lookup(
            &self,
            currency: Currency,
            date: NaiveDate,
        ) -> Result<Option<ExchangeRate>, ArchiveError>;
    }
}

/// Records every reply instead of talking to Telegram.
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<(i64, Reply)>>,
}

impl RecordingBot {
    fn replies(&self) -> Vec<(i64, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> ratebot_core::Result<()> {
        self.sent.lock().unwrap().push((chat.id, reply.clone()));
        Ok(())
    }
}

const SUCCESS_USD: &str = "Exchange rates  USD: 26.75/27.15 грн.";

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 21).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn usd_rate(currency: Currency) -> ExchangeRate {
    ExchangeRate {
        currency,
        purchase_rate: Decimal::from_str("26.75").unwrap(),
        sale_rate: Decimal::from_str("27.15").unwrap(),
    }
}

fn text_message(chat_id: i64, id: &str, content: &str) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: 100,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind: MessageKind::Text,
        created_at: Utc::now(),
    }
}

fn sticker_message(chat_id: i64) -> Message {
    Message {
        content: String::new(),
        kind: MessageKind::Other("sticker".to_string()),
        ..text_message(chat_id, "9", "")
    }
}

fn templates() -> Arc<MessageTemplates> {
    Arc::new(MessageTemplates::builtin().unwrap())
}

struct Fixture {
    handler: RateHandler,
    bot: Arc<RecordingBot>,
    templates: Arc<MessageTemplates>,
}

fn fixture(archive: MockArchive) -> Fixture {
    let templates = templates();
    let bot = Arc::new(RecordingBot::default());
    let responder = Responder::new(Arc::new(archive), templates.clone()).with_clock(fixed_today);
    let handler = RateHandler::new(Arc::new(responder), bot.clone());
    Fixture {
        handler,
        bot,
        templates,
    }
}

async fn reply_text(fixture: &Fixture, message: &Message) -> String {
    match fixture.handler.handle(message).await.unwrap() {
        HandlerResponse::Reply(reply) => reply.text,
        other => panic!("expected Reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_free_text_request_formats_rate() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .with(eq(Currency::Usd), eq(ymd(2021, 1, 1)))
        .times(1)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let fx = fixture(archive);

    let text = reply_text(&fx, &text_message(1, "42", "USD / 01.01.2021")).await;

    assert_eq!(text, SUCCESS_USD);
    let sent = fx.bot.replies();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, 1);
    assert_eq!(sent[0].1.reply_to.as_deref(), Some("42"));
    assert!(!sent[0].1.show_menu);
}

#[tokio::test]
async fn test_canned_today_uses_current_date() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .with(eq(Currency::Usd), eq(fixed_today()))
        .times(1)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let fx = fixture(archive);

    let text = reply_text(&fx, &text_message(1, "1", "Get rate UAH/USD for today.")).await;

    assert_eq!(text, SUCCESS_USD);
}

#[tokio::test]
async fn test_canned_yesterday_uses_previous_day() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .with(eq(Currency::Eur), eq(ymd(2021, 6, 20)))
        .times(1)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let fx = fixture(archive);

    let text = reply_text(&fx, &text_message(1, "1", "Get rate UAH/EUR for yesterday.")).await;

    assert_eq!(text, "Exchange rates  EUR: 26.75/27.15 грн.");
}

#[tokio::test]
async fn test_no_record_renders_empty_answer() {
    let mut archive = MockArchive::new();
    archive.expect_lookup().times(1).returning(|_, _| Ok(None));
    let fx = fixture(archive);

    let text = reply_text(&fx, &text_message(1, "1", "eur 01.01.2030")).await;

    assert_eq!(text, fx.templates.get(TemplateKey::EmptyAnswer));
}

#[tokio::test]
async fn test_archive_failure_renders_service_unavailable() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .times(1)
        .returning(|_, _| Err(ArchiveError::Status(reqwest::StatusCode::BAD_GATEWAY)));
    let fx = fixture(archive);

    let text = reply_text(&fx, &text_message(1, "1", "USD 01.01.2021")).await;

    assert_eq!(text, fx.templates.get(TemplateKey::ServiceUnavailable));
    assert_ne!(text, fx.templates.get(TemplateKey::EmptyAnswer));
}

#[tokio::test]
async fn test_validation_errors_skip_lookup() {
    // No expectations: any lookup call fails the test.
    let fx = fixture(MockArchive::new());

    let cases = [
        ("USD 31.02.2021", TemplateKey::IncorrectDate),
        ("qwer 31.02.2021", TemplateKey::IncorrectDate),
        ("USD 21/12/2021", TemplateKey::IncorrectDate),
        ("USD 21.12.21", TemplateKey::IncorrectDate),
        ("3245324", TemplateKey::IncorrectDate),
        ("USD/ 01.01.2021", TemplateKey::IncorrectCurrency),
        ("qwer / 01.01.2021", TemplateKey::IncorrectCurrency),
        ("122 / 01.01.2021", TemplateKey::IncorrectCurrency),
    ];
    for (input, key) in cases {
        let text = reply_text(&fx, &text_message(1, "1", input)).await;
        assert_eq!(text, fx.templates.get(key), "input {:?}", input);
        assert_ne!(text, SUCCESS_USD);
    }
}

#[tokio::test]
async fn test_non_text_message_is_incorrect_format() {
    let fx = fixture(MockArchive::new());

    let text = reply_text(&fx, &sticker_message(1)).await;

    assert_eq!(text, fx.templates.get(TemplateKey::IncorrectFormat));
}

#[tokio::test]
async fn test_menu_only_on_start_reply() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .times(1)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let fx = fixture(archive);

    let intro = reply_text(&fx, &text_message(1, "1", "/start")).await;
    let answer = reply_text(&fx, &text_message(1, "2", "usd 01.01.2021")).await;

    assert_eq!(intro, fx.templates.get(TemplateKey::Intro));
    assert_eq!(answer, SUCCESS_USD);
    let sent = fx.bot.replies();
    assert!(sent[0].1.show_menu);
    assert!(sent[0].1.reply_to.is_none());
    assert!(!sent[1].1.show_menu);
    assert_eq!(sent[1].1.reply_to.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_menu_flag_is_per_chat() {
    let fx = fixture(MockArchive::new());

    reply_text(&fx, &text_message(1, "1", "/start")).await;
    reply_text(&fx, &text_message(2, "1", "hello")).await;
    reply_text(&fx, &text_message(1, "2", "/start")).await;

    let sent = fx.bot.replies();
    assert_eq!(sent[0], (1, Reply::with_menu(fx.templates.get(TemplateKey::Intro))));
    assert!(!sent[1].1.show_menu);
    assert_eq!(sent[1].0, 2);
    assert!(sent[2].1.show_menu);
}

#[tokio::test]
async fn test_chain_with_logging_handler_returns_reply() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .times(1)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let templates = templates();
    let bot = Arc::new(RecordingBot::default());
    let responder = Responder::new(Arc::new(archive), templates).with_clock(fixed_today);
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RateHandler::new(Arc::new(responder), bot.clone())));

    let response = chain.handle(&text_message(5, "3", "USD 01.01.2021")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(Reply::to_message(SUCCESS_USD, "3")));
    assert_eq!(bot.replies().len(), 1);
}

#[tokio::test]
async fn test_reply_does_not_depend_on_earlier_messages() {
    let mut archive = MockArchive::new();
    archive
        .expect_lookup()
        .times(2)
        .returning(|currency, _| Ok(Some(usd_rate(currency))));
    let responder = Responder::new(Arc::new(archive), templates()).with_clock(fixed_today);

    let request = text_message(1, "2", "USD 01.01.2021");
    let fresh = responder.respond(&request).await;
    let first_intro = responder.respond(&text_message(1, "1", "/start")).await;
    let after_intro = responder.respond(&request).await;
    let second_intro = responder.respond(&text_message(1, "3", "/start")).await;

    assert_eq!(fresh, after_intro);
    assert_eq!(fresh, Reply::to_message(SUCCESS_USD, "2"));
    assert!(first_intro.show_menu);
    assert_eq!(first_intro, second_intro);
}

#[tokio::test]
async fn test_start_with_arguments_is_not_intro() {
    let fx = fixture(MockArchive::new());

    let text = reply_text(&fx, &text_message(1, "1", "/start anything")).await;

    assert_eq!(text, fx.templates.get(TemplateKey::IncorrectDate));
    assert!(!fx.bot.replies()[0].1.show_menu);
}

/// Transport that rejects every reply.
struct RejectingBot;

#[async_trait]
impl Bot for RejectingBot {
    async fn send_reply(&self, _chat: &Chat, _reply: &Reply) -> ratebot_core::Result<()> {
        Err(BotError::Send("Forbidden: bot was blocked by the user".to_string()))
    }
}

#[tokio::test]
async fn test_send_failure_is_returned_to_chain() {
    let responder = Responder::new(Arc::new(MockArchive::new()), templates()).with_clock(fixed_today);
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RateHandler::new(Arc::new(responder), Arc::new(RejectingBot))));

    let err = chain.handle(&text_message(1, "1", "/start")).await.unwrap_err();

    assert!(matches!(err, BotError::Send(_)));
}
