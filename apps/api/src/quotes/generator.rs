//! Generators — the two entry points shared by the HTTP and CLI surfaces.

use rand::Rng;
use tracing::debug;

use crate::llm_client::{LlmError, QuoteWriter};
use crate::quotes::formatter::{finish, fit_famous, format_generated};
use crate::quotes::store::QuoteStore;

/// Returned by [`generate_famous`] when there is nothing to pick from.
pub const PLACEHOLDER: &str = "Add some quotes to famous_quotes.json first.";

/// Asks the writer for a quote on `theme` and fits it to the budget.
/// Writer failures propagate unchanged.
pub async fn generate_original<R>(
    writer: &dyn QuoteWriter,
    theme: &str,
    add_tags: bool,
    rng: &mut R,
) -> Result<String, LlmError>
where
    R: Rng + ?Sized,
{
    let raw = writer.generate(theme).await?;
    debug!("Raw generated quote: {} chars", raw.chars().count());

    let core = format_generated(&raw);
    Ok(finish(core, add_tags, rng))
}

/// Picks a stored quote and formats it, or returns [`PLACEHOLDER`].
pub fn generate_famous<R>(store: &QuoteStore, add_tags: bool, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let Some(record) = store.pick(rng) else {
        return PLACEHOLDER.to_string();
    };

    // Stored quotes are not length-checked at load time.
    finish(fit_famous(record), add_tags, rng)
}
