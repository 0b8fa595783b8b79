//! Axum route handlers for the Quote API. Both endpoints answer in plain text.

use axum::extract::{Query, State};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::errors::AppError;
use crate::quotes::export::{self, ExportRow, QuoteKind, WEB_LABEL};
use crate::quotes::generator::{generate_famous, generate_original};
use crate::quotes::prompts::DEFAULT_THEME;
use crate::state::AppState;

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_true() -> bool {
    true
}

/// Query flags accept `1/0`, `true/false`, `yes/no`, `on/off`, `t/f`, `y/n`
/// in any case.
fn query_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_query_bool(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean value: {raw:?}")))
}

fn parse_query_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub struct OriginalParams {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    pub tags: bool,
    #[serde(default, deserialize_with = "query_bool")]
    pub save: bool,
}

#[derive(Debug, Deserialize)]
pub struct FamousParams {
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    pub tags: bool,
    #[serde(default, deserialize_with = "query_bool")]
    pub save: bool,
}

/// GET /quote/original?theme=&tags=&save=
pub async fn handle_original(
    State(state): State<AppState>,
    Query(params): Query<OriginalParams>,
) -> Result<String, AppError> {
    let mut rng = StdRng::from_os_rng();
    let text = generate_original(state.writer.as_ref(), &params.theme, params.tags, &mut rng).await?;

    if params.save {
        save(&state, QuoteKind::Original, &text)?;
    }
    Ok(text)
}

/// GET /quote/famous?tags=&save=
pub async fn handle_famous(
    State(state): State<AppState>,
    Query(params): Query<FamousParams>,
) -> Result<String, AppError> {
    let mut rng = StdRng::from_os_rng();
    let text = generate_famous(&state.store, params.tags, &mut rng);

    if params.save {
        save(&state, QuoteKind::Famous, &text)?;
    }
    Ok(text)
}

fn save(state: &AppState, kind: QuoteKind, text: &str) -> Result<(), AppError> {
    export::append(&[ExportRow::new(WEB_LABEL, kind, text)], &state.config.export_path)?;
    info!(
        "Saved {} quote to {}",
        kind.as_str(),
        state.config.export_path.display()
    );
    Ok(())
}
