//! Text folding and administrative-suffix stripping for name matching.
//!
//! Recognizer output routinely carries the unit type along with the name
//! ("Kageshwari Manohara Municipality", "काठमाडौं जिल्ला"). The gazetteer is
//! not consistent about it either: some entries keep the qualifier, most
//! rural municipalities drop it. Matching compares stripped forms when the
//! raw forms fail, so the token vocabulary lives here as data.

/// Qualifiers removed by the normalized matching stage.
///
/// Multi-word entries are matched as whole word sequences. Removal is
/// longest-first so `sub-metropolitan city` is consumed before
/// `metropolitan` can split it.
pub const DEFAULT_ADMIN_TOKENS: &[&str] = &[
    "sub-metropolitan city",
    "metropolitan city",
    "rural municipality",
    "sub-metropolitan",
    "metropolitan",
    "municipality",
    "nagarpalika",
    "gaunpalika",
    "district",
    "उपमहानगरपालिका",
    "महानगरपालिका",
    "नगरपालिका",
    "गाउँपालिका",
    "जिल्ला",
];

/// Characters trimmed from both ends of a folded value. Recognizers leave
/// label separators behind (`जिल्ला: काठमाडौं`, `Ward No.-`).
const EDGE_PUNCTUATION: &[char] = &[':', 'ः', ',', '.', '-', ';'];

/// Trim whitespace and label punctuation from both ends, keeping case.
pub fn trim_label(text: &str) -> &str {
    text.trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c) || c.is_whitespace())
}

/// Lower-case, collapse internal whitespace, trim label punctuation.
pub fn fold(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    trim_label(&collapsed).to_string()
}

/// An ordered, extendable list of administrative qualifier tokens.
#[derive(Debug, Clone)]
pub struct AdminTokens {
    // Each token pre-split into folded words, sorted longest-first.
    tokens: Vec<Vec<String>>,
}

impl Default for AdminTokens {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_TOKENS.iter().copied())
    }
}

impl AdminTokens {
    pub fn new<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = Self { tokens: Vec::new() };
        out.extend(tokens);
        out
    }

    /// Add tokens to the vocabulary. Blank tokens are ignored.
    pub fn extend<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            let words: Vec<String> = fold(token).split(' ').map(str::to_string).collect();
            if words.iter().all(|w| w.is_empty()) || self.tokens.contains(&words) {
                continue;
            }
            self.tokens.push(words);
        }
        // Stable: equal-length tokens keep insertion order.
        self.tokens.sort_by(|a, b| b.len().cmp(&a.len()));
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fold `text` and remove every occurrence of every token.
    pub fn strip(&self, text: &str) -> String {
        let folded = fold(text);
        let mut words: Vec<&str> = folded.split(' ').filter(|w| !w.is_empty()).collect();

        for token in &self.tokens {
            if token.len() > words.len() {
                continue;
            }
            let mut kept = Vec::with_capacity(words.len());
            let mut i = 0;
            while i < words.len() {
                let end = i + token.len();
                let hit = end <= words.len()
                    && words[i..end].iter().zip(token).all(|(w, t)| *w == t.as_str());
                if hit {
                    i = end;
                } else {
                    kept.push(words[i]);
                    i += 1;
                }
            }
            words = kept;
        }

        // Native-script qualifiers are often glued to the name: "काठमाडौंजिल्ला".
        if let Some(last) = words.last_mut() {
            let word: &str = *last;
            let glued = self
                .tokens
                .iter()
                .filter(|t| t.len() == 1 && !t[0].is_ascii())
                .map(|t| t[0].as_str())
                .filter(|t| word.len() > t.len() && word.ends_with(t))
                .max_by_key(|t| t.len());
            if let Some(token) = glued {
                *last = &word[..word.len() - token.len()];
            }
        }

        fold(&words.join(" "))
    }
}

/// Strip the default qualifier vocabulary from `text`.
pub fn strip_admin_tokens(text: &str) -> String {
    AdminTokens::default().strip(text)
}
