use anyhow::{anyhow, Result};
use chrono::Local;
use dotenvy::dotenv;
use log::{error, info};
use std::ffi::OsString;
use std::path::PathBuf;

use event_reminder::core::Config;
use event_reminder::features::manifest::Manifest;
use event_reminder::features::notifier::SmtpNotifier;
use event_reminder::features::pipeline;

/// Resolve the manifest path from argv and load it. Any error here is fatal.
fn load_manifest<I>(args: I) -> Result<(PathBuf, Manifest)>
where
    I: IntoIterator<Item = OsString>,
{
    let path: PathBuf = args
        .into_iter()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("no manifest given (usage: event-reminder <manifest.json>)"))?;

    let manifest = Manifest::load(&path)?;
    Ok((path, manifest))
}

async fn run(config: Config) -> Result<()> {
    let (path, manifest) = load_manifest(std::env::args_os())?;
    info!(
        "📄 Loaded {} event(s) from {}",
        manifest.events.len(),
        path.display()
    );

    let now = Local::now();
    let notifier = SmtpNotifier::new(config);
    pipeline::run(&manifest.events, &now, &notifier).await;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if let Err(e) = run(config).await {
        error!("❌ {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn argv(rest: &[&std::path::Path]) -> Vec<OsString> {
        std::iter::once(OsString::from("event-reminder"))
            .chain(rest.iter().map(|p| p.as_os_str().to_owned()))
            .collect()
    }

    #[test]
    fn test_missing_argument_is_fatal() {
        let err = load_manifest(argv(&[])).unwrap_err();
        assert!(err.to_string().contains("no manifest given"));
    }

    #[test]
    fn test_unreadable_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_manifest(argv(&[&path])).unwrap_err();
        assert!(err.to_string().starts_with("read manifest"));
    }

    #[test]
    fn test_malformed_manifest_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"events\": [").unwrap();

        let err = load_manifest(argv(&[file.path()])).unwrap_err();
        assert!(err.to_string().starts_with("parse manifest"));
    }

    #[test]
    fn test_first_argument_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"events":[{{"title":"Launch","time":"2025-06-01"}}]}}"#).unwrap();

        let (path, manifest) = load_manifest(argv(&[file.path()])).unwrap();
        assert_eq!(path, file.path());
        assert_eq!(manifest.events.len(), 1);
    }
}
