use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::lexicon::{DEFAULT_QUOTES, suggestions};
use crate::mood::Mood;

/// Up to `n` distinct suggestions for `mood`, in uniformly random order.
pub fn suggestions_for(mood: Mood, n: usize, rng: &mut impl Rng) -> Vec<&'static str> {
    let mut pool = suggestions(mood).to_vec();
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}

/// One quote, uniformly chosen from `external` when it is present and
/// non-empty, otherwise from the built-in defaults.
pub fn pick_quote(external: Option<&[String]>, rng: &mut impl Rng) -> String {
    if let Some(quotes) = external
        && let Some(quote) = quotes.choose(rng)
    {
        return quote.clone();
    }
    DEFAULT_QUOTES
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_QUOTES[0])
        .to_string()
}
