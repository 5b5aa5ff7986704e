//! Token Resolver
//!
//! Every command that names something -- an exit, an item in the room, an item
//! in the inventory, or the verb itself -- has to turn a fragment the player
//! typed into exactly one label from a known set. This module is the single
//! place that happens.
//!
//! Resolution order:
//! - the fragment is trimmed and lower-cased; nothing left is `EmptyInput`
//! - a fragment equal to an alias key is replaced by its canonical form
//! - a candidate equal to the fragment wins outright, even when the fragment is
//!   also a prefix of other candidates
//! - otherwise candidates are matched by the caller's [`MatchMode`]; none is
//!   `NoMatch`, one is the answer, more is `Ambiguous`
//!
//! Callers pick the mode per candidate set: exits use `Prefix` (labels are
//! short and predictable) while items use `Substring` (names are longer and
//! "get wand" should find the "magic wand").

use log::debug;
use thiserror::Error;

/// How a fragment is compared against candidate labels after the exact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only an exact (case-insensitive) match resolves.
    Exact,
    /// Candidate starts with the fragment.
    Prefix,
    /// Candidate contains the fragment anywhere.
    Substring,
}

/// A fixed table of shorthand -> canonical substitutions.
#[derive(Debug, Clone, Copy)]
pub struct Aliases(&'static [(&'static str, &'static str)]);

impl Aliases {
    pub const NONE: Aliases = Aliases(&[]);

    pub const fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self(table)
    }

    /// The canonical form of `fragment`, or `fragment` itself if it is not an alias.
    pub fn canonical<'a>(&self, fragment: &'a str) -> &'a str {
        self.0
            .iter()
            .find(|(alias, _)| *alias == fragment)
            .map_or(fragment, |&(_, canonical)| canonical)
    }

    pub fn contains_key(&self, fragment: &str) -> bool {
        self.0.iter().any(|(alias, _)| *alias == fragment)
    }

    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|&(alias, _)| alias)
    }
}

/// Single-letter and two-letter compass shortcuts.
pub const DIRECTION_ALIASES: Aliases = Aliases::new(&[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("u", "up"),
    ("d", "down"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
]);

/// Verb shortcuts and synonyms.
pub const VERB_ALIASES: Aliases = Aliases::new(&[
    ("i", "inventory"),
    ("inv", "inventory"),
    ("q", "quit"),
    ("exit", "quit"),
    ("l", "look"),
    ("take", "get"),
    ("?", "help"),
]);

/// Reasons a fragment did not resolve to exactly one label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("nothing was given to match")]
    EmptyInput,
    #[error("nothing matches '{0}'")]
    NoMatch(String),
    #[error("ambiguous between {}", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Resolve `fragment` to one of `candidates`.
///
/// Returns the candidate label as given (original case). Identical labels in
/// the candidate set count once.
///
/// # Errors
/// - `EmptyInput` if the fragment is blank
/// - `NoMatch` if no candidate matches
/// - `Ambiguous` (with every matching candidate, in candidate order) if several do
pub fn resolve<'a, I>(fragment: &str, candidates: I, mode: MatchMode, aliases: Aliases) -> Result<&'a str, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered = fragment.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ResolveError::EmptyInput);
    }
    let needle = aliases.canonical(&lowered);
    let candidates: Vec<&'a str> = candidates.into_iter().collect();

    if let Some(exact) = candidates.iter().copied().find(|label| label.to_lowercase() == needle) {
        debug!("resolved '{fragment}' exactly to '{exact}'");
        return Ok(exact);
    }

    let mut matches: Vec<&'a str> = Vec::new();
    for label in candidates {
        let lower_label = label.to_lowercase();
        let hit = match mode {
            MatchMode::Exact => false,
            MatchMode::Prefix => lower_label.starts_with(needle),
            MatchMode::Substring => lower_label.contains(needle),
        };
        if hit && !matches.contains(&label) {
            matches.push(label);
        }
    }

    match matches.as_slice() {
        [] => {
            debug!("'{fragment}' matched nothing ({mode:?})");
            Err(ResolveError::NoMatch(lowered.clone()))
        },
        [only] => {
            debug!("resolved '{fragment}' to '{only}' ({mode:?})");
            Ok(*only)
        },
        _ => {
            debug!("'{fragment}' is ambiguous: {matches:?}");
            Err(ResolveError::Ambiguous(matches.iter().map(|label| (*label).to_string()).collect()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXITS: [&str; 4] = ["north", "northeast", "south", "up"];

    #[test]
    fn exact_match_beats_prefix_ambiguity() {
        assert_eq!(resolve("north", EXITS, MatchMode::Prefix, Aliases::NONE), Ok("north"));
    }

    #[test]
    fn unique_prefix_resolves() {
        assert_eq!(resolve("so", EXITS, MatchMode::Prefix, Aliases::NONE), Ok("south"));
        assert_eq!(resolve("nor", ["north", "up"], MatchMode::Prefix, Aliases::NONE), Ok("north"));
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        assert_eq!(
            resolve("nor", EXITS, MatchMode::Prefix, Aliases::NONE),
            Err(ResolveError::Ambiguous(vec!["north".into(), "northeast".into()]))
        );
    }

    #[test]
    fn alias_is_substituted_before_matching() {
        assert_eq!(resolve("n", EXITS, MatchMode::Prefix, DIRECTION_ALIASES), Ok("north"));
        assert_eq!(resolve("ne", EXITS, MatchMode::Prefix, DIRECTION_ALIASES), Ok("northeast"));
        assert_eq!(resolve("u", EXITS, MatchMode::Prefix, DIRECTION_ALIASES), Ok("up"));
        // without the alias table "n" is just a prefix
        assert!(matches!(
            resolve("n", EXITS, MatchMode::Prefix, Aliases::NONE),
            Err(ResolveError::Ambiguous(_))
        ));
    }

    #[test]
    fn alias_without_matching_exit_is_no_match() {
        assert_eq!(
            resolve("w", EXITS, MatchMode::Prefix, DIRECTION_ALIASES),
            Err(ResolveError::NoMatch("w".into()))
        );
    }

    #[test]
    fn alias_expansion_still_prefix_matches() {
        assert_eq!(
            resolve("w", ["west wing", "up"], MatchMode::Prefix, DIRECTION_ALIASES),
            Ok("west wing")
        );
        assert_eq!(
            resolve("w", ["wharf", "up"], MatchMode::Prefix, DIRECTION_ALIASES),
            Err(ResolveError::NoMatch("w".into()))
        );
    }

    #[test]
    fn matching_ignores_case_but_returns_original_label() {
        let items = ["Brass Key", "Magic Wand"];
        assert_eq!(resolve("WAND", items, MatchMode::Substring, Aliases::NONE), Ok("Magic Wand"));
        assert_eq!(resolve("brass key", items, MatchMode::Exact, Aliases::NONE), Ok("Brass Key"));
    }

    #[test]
    fn substring_mode_finds_inner_words() {
        let items = ["magic wand", "rope"];
        assert_eq!(resolve("wand", items, MatchMode::Substring, Aliases::NONE), Ok("magic wand"));
        assert_eq!(
            resolve("wand", items, MatchMode::Prefix, Aliases::NONE),
            Err(ResolveError::NoMatch("wand".into()))
        );
    }

    #[test]
    fn exact_mode_refuses_partials() {
        assert_eq!(
            resolve("ro", ["rope"], MatchMode::Exact, Aliases::NONE),
            Err(ResolveError::NoMatch("ro".into()))
        );
    }

    #[test]
    fn duplicate_labels_count_once() {
        assert_eq!(resolve("co", ["coin", "coin"], MatchMode::Prefix, Aliases::NONE), Ok("coin"));
    }

    #[test]
    fn blank_fragment_is_empty_input() {
        assert_eq!(resolve("", EXITS, MatchMode::Prefix, Aliases::NONE), Err(ResolveError::EmptyInput));
        assert_eq!(resolve("   ", EXITS, MatchMode::Substring, Aliases::NONE), Err(ResolveError::EmptyInput));
        assert_eq!(resolve("", [], MatchMode::Exact, VERB_ALIASES), Err(ResolveError::EmptyInput));
    }

    #[test]
    fn ambiguous_error_lists_candidates() {
        let err = resolve("s", ["sword", "shield"], MatchMode::Substring, Aliases::NONE).unwrap_err();
        assert_eq!(err.to_string(), "ambiguous between sword, shield");
    }

    proptest! {
        #[test]
        fn exact_candidate_always_wins(
            base in "[a-z]{1,8}",
            suffixes in prop::collection::vec("[a-z]{1,4}", 1..5),
        ) {
            let mut labels: Vec<String> = suffixes.iter().map(|s| format!("{base}{s}")).collect();
            labels.insert(labels.len() / 2, base.clone());
            for mode in [MatchMode::Prefix, MatchMode::Substring, MatchMode::Exact] {
                let found = resolve(&base, labels.iter().map(String::as_str), mode, Aliases::NONE);
                prop_assert_eq!(found, Ok(base.as_str()));
            }
        }

        #[test]
        fn blank_input_is_never_no_match(blank in "[ \t]{0,6}", labels in prop::collection::vec("[a-z]{0,6}", 0..5)) {
            let found = resolve(&blank, labels.iter().map(String::as_str), MatchMode::Substring, DIRECTION_ALIASES);
            prop_assert_eq!(found, Err(ResolveError::EmptyInput));
        }

        #[test]
        fn ambiguity_carries_every_candidate(
            base in "[a-z]{1,6}",
            suffixes in prop::collection::btree_set("[a-z]{1,4}", 2..5),
        ) {
            let labels: Vec<String> = suffixes.iter().map(|s| format!("{base}{s}")).collect();
            let found = resolve(&base, labels.iter().map(String::as_str), MatchMode::Prefix, Aliases::NONE);
            prop_assert_eq!(found, Err(ResolveError::Ambiguous(labels.clone())));
        }
    }
}
