//! Command-line surface: `serve` runs the HTTP API, `generate` prints one quote.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::config::Config;
use crate::llm_client::{LlmClient, QuoteWriter};
use crate::quotes::dedupe::SeenHashes;
use crate::quotes::export::{self, ExportRow, QuoteKind};
use crate::quotes::formatter::fits_budget;
use crate::quotes::generator::{generate_famous, generate_original};
use crate::quotes::prompts::DEFAULT_THEME;
use crate::quotes::store::QuoteStore;

#[derive(Parser, Debug)]
#[command(
    name = "quotes",
    about = "Short motivational quotes, generated or famous",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Produce one quote, print it and append it to the export file
    Generate {
        /// Kind of quote to produce
        #[arg(long = "type", value_enum, default_value = "original")]
        kind: KindChoice,

        /// Theme passed to the quote generator
        #[arg(long, default_value = DEFAULT_THEME)]
        theme: String,

        /// Skip hashtags
        #[arg(long)]
        no_tags: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindChoice {
    Original,
    Famous,
}

impl From<KindChoice> for QuoteKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Original => QuoteKind::Original,
            KindChoice::Famous => QuoteKind::Famous,
        }
    }
}

/// Entry point for `quotes generate`.
pub async fn run_generate(config: &Config, kind: KindChoice, theme: &str, add_tags: bool) -> Result<()> {
    let store = QuoteStore::load(&config.quotes_path)
        .with_context(|| format!("Failed to load {}", config.quotes_path.display()))?;
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    );
    let mut seen = SeenHashes::new();
    let mut rng = StdRng::from_os_rng();

    let request = GenerateRequest {
        kind: kind.into(),
        theme,
        add_tags,
    };
    if let Some(text) =
        generate_once(&request, &llm, &store, &mut seen, &mut rng, &config.export_path).await?
    {
        println!("{text}");
    }
    Ok(())
}

pub struct GenerateRequest<'a> {
    pub kind: QuoteKind,
    pub theme: &'a str,
    pub add_tags: bool,
}

/// Generates one quote and, if it is new to `seen` and within budget, exports
/// it with a UTC timestamp. Returns the accepted text.
pub async fn generate_once<R: Rng + ?Sized>(
    request: &GenerateRequest<'_>,
    writer: &dyn QuoteWriter,
    store: &QuoteStore,
    seen: &mut SeenHashes,
    rng: &mut R,
    export_path: &Path,
) -> Result<Option<String>> {
    let text = match request.kind {
        QuoteKind::Original => generate_original(writer, request.theme, request.add_tags, rng)
            .await
            .context("Original quote generation failed")?,
        QuoteKind::Famous => generate_famous(store, request.add_tags, rng),
    };

    if !seen.accept(&text) {
        warn!("Skipping repeated quote");
        return Ok(None);
    }
    if !fits_budget(&text) {
        warn!("Skipping quote over the length budget");
        return Ok(None);
    }

    let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    export::append(&[ExportRow::new(created_at, request.kind, text.as_str())], export_path)
        .with_context(|| format!("Failed to export to {}", export_path.display()))?;

    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::llm_client::LlmError;
    use crate::quotes::generator::PLACEHOLDER;

    struct FixedWriter(&'static str);

    #[async_trait]
    impl QuoteWriter for FixedWriter {
        async fn generate(&self, _theme: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct DownWriter;

    #[async_trait]
    impl QuoteWriter for DownWriter {
        async fn generate(&self, _theme: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream down".to_string(),
            })
        }
    }

    fn request(kind: QuoteKind) -> GenerateRequest<'static> {
        GenerateRequest {
            kind,
            theme: "focus",
            add_tags: false,
        }
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::parse_from(["quotes", "generate", "--type", "famous", "--no-tags"]);
        match cli.command {
            Some(Command::Generate { kind, theme, no_tags }) => {
                assert!(matches!(kind, KindChoice::Famous));
                assert_eq!(theme, DEFAULT_THEME);
                assert!(no_tags);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["quotes"]);
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn test_generate_once_exports_timestamped_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("out.csv");
        let mut seen = SeenHashes::new();
        let mut rng = StdRng::seed_from_u64(2);

        let text = generate_once(
            &request(QuoteKind::Original),
            &FixedWriter("Small steps, daily."),
            &QuoteStore::default(),
            &mut seen,
            &mut rng,
            &path,
        )
        .await
        .unwrap();

        assert_eq!(text.as_deref(), Some("Small steps, daily."));
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert!(row[0].contains('T'));
        assert_eq!(&row[1], "original");
        assert_eq!(&row[2], "Small steps, daily.");
    }

    #[tokio::test]
    async fn test_generate_once_skips_repeat_in_same_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut seen = SeenHashes::new();
        let mut rng = StdRng::seed_from_u64(2);
        let req = request(QuoteKind::Famous);
        let store = QuoteStore::default();

        let first = generate_once(&req, &DownWriter, &store, &mut seen, &mut rng, &path)
            .await
            .unwrap();
        let second = generate_once(&req, &DownWriter, &store, &mut seen, &mut rng, &path)
            .await
            .unwrap();

        assert_eq!(first.as_deref(), Some(PLACEHOLDER));
        assert_eq!(second, None);
        let lines = std::fs::read_to_string(&path).unwrap();
        assert_eq!(lines.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_generate_once_propagates_writer_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut seen = SeenHashes::new();
        let mut rng = StdRng::seed_from_u64(2);

        let result = generate_once(
            &request(QuoteKind::Original),
            &DownWriter,
            &QuoteStore::default(),
            &mut seen,
            &mut rng,
            &path,
        )
        .await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
