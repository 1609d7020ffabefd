use crate::api::{run_exchange, ExchangeOutcome, SummarizeClient, SummarizeRequest};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalSession;
use std::future::Future;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the form until the user quits.
///
/// The UI loop runs on the calling thread; exchanges run on `handle` and
/// report back through the event channel.
pub fn run(mut app: App, client: SummarizeClient, handle: Handle) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let events = EventHandler::new(TICK_RATE);
    let client = Arc::new(client);

    tracing::info!(endpoint = %client.endpoint(), "Form ready");

    loop {
        session.terminal_mut().draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Send(request) = handle_key(&mut app, key) {
                    spawn_exchange(&handle, Arc::clone(&client), request, events.sender());
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Exchange(outcome)) => app.on_exchange_complete(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Form closed");
    Ok(())
}

/// Run one exchange in the background and post its outcome to `tx`.
pub fn spawn_exchange(
    handle: &Handle,
    client: Arc<SummarizeClient>,
    request: SummarizeRequest,
    tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    spawn_outcome(handle, async move { run_exchange(&client, &request).await }, tx)
}

/// Drive `exchange` on `handle` and post whatever it yields to `tx`.
///
/// An outcome is always posted. A panicked or cancelled exchange reports
/// `Failed`, so the form never stays in loading.
pub fn spawn_outcome<F>(handle: &Handle, exchange: F, tx: Sender<AppEvent>) -> JoinHandle<()>
where
    F: Future<Output = ExchangeOutcome> + Send + 'static,
{
    let task = handle.spawn(exchange);

    handle.spawn(async move {
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "Summarization task did not complete");
                ExchangeOutcome::Failed
            }
        };
        if tx.send(AppEvent::Exchange(outcome)).is_err() {
            tracing::debug!("UI loop gone before exchange finished");
        }
    })
}
