//! Background exchange task used by the UI loop.

mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use common::{client_for, MockResponse, MockServer};
use summarize_form::api::{ExchangeOutcome, Mode, SummarizeRequest};
use summarize_form::ui::events::AppEvent;
use summarize_form::ui::runtime::{spawn_exchange, spawn_outcome};

fn request() -> SummarizeRequest {
    SummarizeRequest {
        text: "Hello world".into(),
        mode: Mode::Abstractive,
        length: None,
    }
}

fn expect_outcome(rx: &mpsc::Receiver<AppEvent>) -> ExchangeOutcome {
    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::Exchange(outcome)) => outcome,
        Ok(_) => panic!("Expected Exchange event"),
        Err(err) => panic!("No exchange event: {}", err),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn outcome_is_posted_to_event_channel() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::summary("Hello.")).await;
    let client = Arc::new(client_for(&server.base_url()));
    let (tx, rx) = mpsc::channel();

    let task = spawn_exchange(&tokio::runtime::Handle::current(), client, request(), tx);
    task.await.unwrap();

    assert_eq!(expect_outcome(&rx), ExchangeOutcome::Summary("Hello.".into()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_server_keeps_exchange_outstanding() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::summary("Late.").with_delay(300))
        .await;
    let client = Arc::new(client_for(&server.base_url()));
    let (tx, rx) = mpsc::channel();

    let task = spawn_exchange(&tokio::runtime::Handle::current(), client, request(), tx);
    assert!(rx.try_recv().is_err(), "no outcome before the server answers");

    task.await.unwrap();
    assert_eq!(expect_outcome(&rx), ExchangeOutcome::Summary("Late.".into()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn panicking_exchange_still_reports_failure() {
    let (tx, rx) = mpsc::channel();
    let exchange = async {
        let text: Option<&str> = None;
        ExchangeOutcome::Summary(text.expect("exchange blew up").to_string())
    };

    let task = spawn_outcome(&tokio::runtime::Handle::current(), exchange, tx);
    task.await.unwrap();

    assert_eq!(expect_outcome(&rx), ExchangeOutcome::Failed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dropped_receiver_does_not_fail_the_task() {
    let (tx, rx) = mpsc::channel();
    drop(rx);

    let task = spawn_outcome(
        &tokio::runtime::Handle::current(),
        async { ExchangeOutcome::Rejected("Text too short".into()) },
        tx,
    );
    task.await.unwrap();
}
