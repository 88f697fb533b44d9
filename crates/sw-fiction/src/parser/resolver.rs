//! Name resolution with fuzzy matching.

use strsim::jaro_winkler;
use sw_core::{Fixture, Item, Npc};

/// Minimum similarity score for fuzzy matching (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Anything the player can refer to by name.
pub trait Named {
    /// The display name.
    fn name(&self) -> &str;
}

impl Named for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Npc {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Fixture {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Resolve `input` to an index into `candidates`.
///
/// A case-insensitive exact match wins; otherwise the most similar name
/// scoring at least [`FUZZY_THRESHOLD`] is chosen.
pub fn resolve<T: Named>(candidates: &[T], input: &str) -> Option<usize> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    if let Some(pos) = candidates
        .iter()
        .position(|c| c.name().to_lowercase() == input)
    {
        return Some(pos);
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let score = jaro_winkler(&input, &candidate.name().to_lowercase());
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

/// The most similar name in `names`, if any scores above the threshold.
pub fn suggest<'a>(names: &[&'a str], input: &str) -> Option<&'a str> {
    resolve(names, input).map(|i| names[i])
}
