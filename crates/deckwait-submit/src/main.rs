use clap::{value_parser, Arg, Command};
use deckwait_form::FormValues;
use deckwait_submit::{SheetStore, SubmitConfig, SubmitError, TracingNotifier, WaitlistForm};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Command::new("deckwait")
        .version(deckwait_submit::VERSION)
        .about("Submit a waitlist entry to the spreadsheet endpoint")
        .arg(
            Arg::new("answers")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("JSON file with the form field values"),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .help("Override the storage endpoint URL"),
        );

    let matches = cli.get_matches();
    let answers_path = matches
        .get_one::<PathBuf>("answers")
        .expect("answers is required");

    let mut config = SubmitConfig::new();
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config = config.with_endpoint(endpoint.clone());
    }

    let raw = std::fs::read_to_string(answers_path)?;
    let values: FormValues = serde_json::from_str(&raw)?;

    let store = SheetStore::new(&config);
    let mut form = WaitlistForm::with_config(store, TracingNotifier::new(), config);
    *form.values_mut() = values;

    match form.submit().await {
        Ok(()) => {
            form.settle().await;
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("submission failed: {e}");
            std::process::exit(1);
        }
    }
}
