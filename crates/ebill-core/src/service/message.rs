//! Message router: tries registered parsers against an inbound SMS.

use tracing::{debug, info};

use super::{BillService, Result};
use crate::error::{ParserFailure, ServiceError};
use crate::models::message::Message;
use crate::sms::{ParsedSms, SmsParser};

/// Routes inbound messages through the registered parsers.
///
/// Parsers are tried in registration order; the first grammar that accepts
/// the body wins and its record is dispatched to the matching handler. A
/// message no grammar accepts yields [`ServiceError::NoMatch`] carrying
/// every parser's rejection.
pub struct MessageService {
    parsers: Vec<Box<dyn SmsParser>>,
    bill_service: BillService,
}

impl MessageService {
    pub fn new(parsers: Vec<Box<dyn SmsParser>>, bill_service: BillService) -> Self {
        Self {
            parsers,
            bill_service,
        }
    }

    /// Route one message to its handler.
    ///
    /// Test messages are parsed like any other but never reach the sink.
    pub async fn pass_message(&self, msg: &Message) -> Result<()> {
        info!(sender = %msg.sender, "processing message");

        let mut failures = Vec::new();
        for parser in &self.parsers {
            match parser.parse(&msg.body) {
                Ok(parsed) => {
                    if msg.test {
                        info!(parser = parser.name(), "test message, skipping storage");
                        return Ok(());
                    }
                    return self.dispatch(parsed).await;
                }
                Err(error) => {
                    debug!(parser = parser.name(), %error, "parser rejected message");
                    failures.push(ParserFailure {
                        parser: parser.name(),
                        error,
                    });
                }
            }
        }

        Err(ServiceError::NoMatch(failures))
    }

    async fn dispatch(&self, parsed: ParsedSms) -> Result<()> {
        match parsed {
            ParsedSms::LecoBill(bill) => self.bill_service.handle(&bill).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::{ParseError, StorageError, ValidationError};
    use crate::models::bill::ElectricityBill;
    use crate::sms::LecoParser;
    use crate::storage::{BillSink, MemorySink};

    const BILL_BODY: &str = "A/N: 123456789 (Domestic)\nAccount Name Example\nRead On: 27-JUL-25";

    fn service_with(sink: Box<dyn BillSink>) -> MessageService {
        MessageService::new(vec![Box::new(LecoParser::new())], BillService::new(sink))
    }

    #[tokio::test]
    async fn test_matched_message_reaches_sink() {
        let sink = MemorySink::new();
        let service = service_with(Box::new(sink.clone()));

        service
            .pass_message(&Message::new("LECO", BILL_BODY))
            .await
            .unwrap();

        let stored = sink.bills();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].account_number, "123456789");
    }

    #[tokio::test]
    async fn test_test_message_is_routed_but_not_stored() {
        let sink = MemorySink::new();
        let service = service_with(Box::new(sink.clone()));

        let mut msg = Message::new("dev", BILL_BODY);
        msg.test = true;
        service.pass_message(&msg).await.unwrap();

        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_no_match_aggregates_rejections() {
        let service = service_with(Box::new(MemorySink::new()));

        let err = service
            .pass_message(&Message::new("SPAM", "win a free holiday"))
            .await
            .unwrap_err();

        match err {
            ServiceError::NoMatch(failures) => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].parser, "leco");
                assert_eq!(
                    failures[0].error,
                    ParseError::Validation(ValidationError::MissingRequiredField(
                        "account number"
                    ))
                );
            }
            other => panic!("expected NoMatch, got {other}"),
        }
    }

    struct FailingSink;

    #[async_trait]
    impl BillSink for FailingSink {
        async fn append(&self, _bill: &ElectricityBill) -> crate::storage::Result<()> {
            Err(StorageError::Sink("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_sink_failure_propagates() {
        let service = service_with(Box::new(FailingSink));

        let err = service
            .pass_message(&Message::new("LECO", BILL_BODY))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Storage(StorageError::Sink(_))));
    }
}
