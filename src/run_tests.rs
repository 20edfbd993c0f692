//! Tests for notification delivery.

use std::sync::Mutex;

use pd_notify::gateway::{Gateway, Options, Raw, Response, map_response};

use super::{RunError, deliver};

/// Gateway double returning a fixed outcome and recording calls.
struct FakeGateway {
    success: bool,
    calls: Mutex<Vec<(String, String, Options)>>,
}

impl FakeGateway {
    fn new(success: bool) -> Self {
        Self {
            success,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Gateway for FakeGateway {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn notify(&self, to: &str, message: &str, options: Options) -> Response {
        self.calls
            .lock()
            .unwrap()
            .push((to.to_string(), message.to_string(), options));

        let error = (!self.success).then(|| "Invalid service.".to_string());
        map_response(self.success, error, Raw::Empty)
    }
}

#[tokio::test]
async fn deliver_returns_successful_response() {
    let gateway = FakeGateway::new(true);

    let response = deliver(&gateway, "db-primary", "Disk full", Options::new())
        .await
        .unwrap();

    assert!(response.success());
    assert_eq!(response.message(), "Message sent");
}

#[tokio::test]
async fn deliver_forwards_arguments_once() {
    let gateway = FakeGateway::new(true);
    let options = Options::new().with("client", "nagios");

    deliver(&gateway, "db-primary", "Disk full", options.clone())
        .await
        .unwrap();

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ("db-primary".to_string(), "Disk full".to_string(), options)
    );
}

#[tokio::test]
async fn deliver_turns_failure_into_error() {
    let gateway = FakeGateway::new(false);

    let result = deliver(&gateway, "db-primary", "Disk full", Options::new()).await;

    match result {
        Err(RunError::Rejected { gateway, message }) => {
            assert_eq!(gateway, "fake");
            assert_eq!(message, "Invalid service.");
        }
        other => panic!("Expected rejection, got {other:?}"),
    }
}

#[test]
fn rejected_error_displays_gateway_and_reason() {
    let error = RunError::Rejected {
        gateway: "pagerduty",
        message: "Incorrect request values.".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "pagerduty notification failed: Incorrect request values."
    );
}
