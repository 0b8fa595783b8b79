//! Text Formatter — turns raw quote text into a publishable string.
//!
//! Every function here is infallible. When a preferred candidate would blow the
//! length budget, the shorter fallback is returned instead.
//!
//! Lengths are counted in chars, not bytes.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::quotes::store::QuoteRecord;

/// Hard ceiling for any published quote.
pub const MAX_LEN: usize = 280;

/// Ceiling for generated text before hashtags are considered.
pub const GENERATED_MAX_LEN: usize = 240;

const ELLIPSIS: &str = "...";

/// Default number of hashtags appended by the generators.
pub const DEFAULT_TAG_COUNT: usize = 2;

pub static HASHTAG_POOLS: [&[&str]; 3] = [
    &["#motivation", "#inspiration", "#mindset", "#growth"],
    &["#creativity", "#discipline", "#focus", "#resilience"],
    &["#buildinpublic", "#success", "#habits", "#learn"],
];

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn fits_budget(s: &str) -> bool {
    char_len(s) <= MAX_LEN
}

/// Cuts `s` down so that it, plus a trailing ellipsis, is at most `limit` chars.
/// Strings already within `limit` come back untouched.
pub fn truncate_with_ellipsis(s: &str, limit: usize) -> String {
    if char_len(s) <= limit {
        return s.to_string();
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push_str(ELLIPSIS);
    out
}

/// `“{text}” — {author}`, with ` ({source})` appended only when it still fits.
pub fn format_famous(record: &QuoteRecord) -> String {
    let base = format!("“{}” — {}", record.text, record.author);
    match &record.source {
        Some(source) => {
            let with_source = format!("{base} ({source})");
            if fits_budget(&with_source) {
                with_source
            } else {
                base
            }
        }
        None => base,
    }
}

/// [`format_famous`], but when even the base form is over budget the quote
/// text is shortened with an ellipsis so the closing mark and author survive.
pub fn fit_famous(record: &QuoteRecord) -> String {
    let formatted = format_famous(record);
    if fits_budget(&formatted) {
        return formatted;
    }

    let frame = char_len("“” — ") + char_len(&record.author);
    let text_budget = MAX_LEN.saturating_sub(frame);
    if text_budget <= ELLIPSIS.len() {
        // Author alone eats the budget.
        return truncate_with_ellipsis(&formatted, MAX_LEN);
    }

    let text = truncate_with_ellipsis(&record.text, text_budget);
    format!("“{text}” — {}", record.author)
}

/// Normalizes LLM output and caps it at [`GENERATED_MAX_LEN`], leaving
/// headroom for hashtags.
pub fn format_generated(raw: &str) -> String {
    truncate_with_ellipsis(&normalize(raw), GENERATED_MAX_LEN)
}

/// Appends `n` distinct tags sampled from one randomly chosen pool.
///
/// Returns `text` unchanged if the tagged form would exceed [`MAX_LEN`], or if
/// the pool cannot supply `n` distinct tags. Never appends a partial set.
pub fn add_hashtags<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let Some(pool) = HASHTAG_POOLS.choose(rng) else {
        return text.to_string();
    };
    if n == 0 || n > pool.len() {
        return text.to_string();
    }

    let tags: Vec<&str> = pool.choose_multiple(rng, n).copied().collect();
    let candidate = format!("{text} {}", tags.join(" "));

    if fits_budget(&candidate) {
        candidate
    } else {
        text.to_string()
    }
}

/// Final composition step shared by both generators: optionally tag the core
/// text, keeping the tagged form only if it is within budget.
pub fn finish<R: Rng + ?Sized>(core: String, add_tags: bool, rng: &mut R) -> String {
    if !add_tags {
        return core;
    }
    let tagged = add_hashtags(&core, DEFAULT_TAG_COUNT, rng);
    if fits_budget(&tagged) {
        tagged
    } else {
        core
    }
}
