use crate::error::{CliError, Result, ResultExt};
use crate::notifier::TerminalNotifier;
use crate::store::open_store;
use crate::ui::{self, Tone};
use request_dispatch::{http_dispatcher, DispatchConfig, Outcome, RequestSpec, TerminalEvent};
use serde_json::Value;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct SendArgs {
    pub path: String,
    pub method: String,
    pub data: Option<String>,
    pub config_path: String,
    pub store_path: Option<String>,
    pub verbose: bool,
}

pub fn execute(args: SendArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: SendArgs) -> Result<()> {
    let config = DispatchConfig::load_with_validation(&args.config_path)
        .with_context(|| "Failed to load configuration")?;

    let payload = args
        .data
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .with_context(|| "Invalid --data payload")?;

    let store = open_store(args.store_path.as_deref())?;
    let dispatcher = http_dispatcher(config, store, TerminalNotifier::new())?;

    let mut spec = RequestSpec::new(args.path, args.method);
    spec.payload = payload;

    if args.verbose {
        ui::status(Tone::Note, &format!(
            "{} {}",
            spec.method,
            dispatcher.config().full_url(&spec.target_path)
        ));
    }

    let outcome = dispatcher.execute(spec).await;
    report(&outcome, args.verbose)?;

    if outcome.is_accepted() {
        Ok(())
    } else {
        Err(CliError::RequestRejected)
    }
}

fn report(outcome: &Outcome, verbose: bool) -> Result<()> {
    match outcome {
        Outcome::Accepted {
            data,
            token_refreshed,
            ..
        } => {
            println!("{}", serde_json::to_string_pretty(data)?);
            if *token_refreshed {
                ui::status(Tone::Done, "Session token refreshed");
            }
        }
        Outcome::AuthError { .. } => {
            ui::status(Tone::Caution, "Session storage cleared; log in again");
        }
        _ => {}
    }

    if verbose && outcome.is_failure() {
        match outcome.terminal_event() {
            TerminalEvent::Response(envelope) => {
                ui::heading(&format!("Response {}", envelope.status_code));
                println!("{}", serde_json::to_string_pretty(&envelope.body)?);
            }
            TerminalEvent::TransportFailure(failure) => ui::status(Tone::Note, &failure.to_string()),
        }
    }

    Ok(())
}
