//! Turning free text into canonical ingredient tokens.
//!
//! Both sides of a match go through this module: the user's typed text is
//! split into an [`IngredientSet`], and every recipe ingredient name is folded
//! with [`normalize_name`] when the recipe is built.

use std::collections::BTreeSet;

/// A deduplicated set of normalized ingredient tokens.
///
/// Ordering and repetition of the typed input carry no weight, so the set is
/// kept sorted to make iteration deterministic. Alongside the single-word
/// tokens the set keeps each comma-delimited phrase, so multi-word names are
/// only matched where their words were typed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    tokens: BTreeSet<String>,
    phrases: BTreeSet<String>,
}

impl IngredientSet {
    /// Normalize raw user text: split on commas and whitespace, lower-case,
    /// strip edge punctuation, drop empties, deduplicate.
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::default();
        set.extend_from_text(text);
        set
    }

    fn extend_from_text(&mut self, text: &str) {
        for phrase in text.split(',').filter_map(normalize_name) {
            self.tokens.extend(phrase.split(' ').map(str::to_string));
            self.phrases.insert(phrase);
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Whether a normalized recipe ingredient is covered by this set.
    ///
    /// Single-word names are plain token membership. Multi-word names
    /// ("soy sauce") must appear as consecutive words inside one typed phrase.
    pub fn covers(&self, ingredient: &str) -> bool {
        if ingredient.is_empty() {
            return false;
        }
        if !ingredient.contains(' ') {
            return self.tokens.contains(ingredient);
        }
        let needle = format!(" {} ", ingredient);
        self.phrases
            .iter()
            .any(|phrase| format!(" {} ", phrase).contains(&needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Re-render the set as text that normalizes back to the same set.
    pub fn to_text(&self) -> String {
        self.phrases.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for item in iter {
            set.extend_from_text(item.as_ref());
        }
        set
    }
}

/// Fold a recipe ingredient name into its canonical form.
///
/// Returns `None` when nothing meaningful is left.
pub fn normalize_name(name: &str) -> Option<String> {
    let words: Vec<String> = name.split_whitespace().filter_map(normalize_token).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn normalize_token(raw: &str) -> Option<String> {
    // Lower-case first: some characters expand into combining marks.
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
