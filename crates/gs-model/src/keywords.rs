// keywords.rs - Ordered keyword tables and the matcher shared by every stage.
//
// A keyword table is a static slice of `(label, keywords)` rows. Declaration
// order is significant: when two labels match a text equally well, the row
// declared first wins. Keeping the tables as plain data (instead of chains
// of `if text.contains(..)`) lets tests inspect ordering and coverage
// directly.
//
// Matching works on lower-cased alphanumeric tokens. A single-word keyword
// matches any token it is a prefix of ("test" matches "testing" but not
// "latest"). A multi-word keyword such as "multi-step" must match
// consecutive tokens, the last one by prefix.

/// An ordered table of labels and the keywords that select them.
pub type KeywordTable<L> = [(L, &'static [&'static str])];

/// Split text into lower-cased alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Whether `keyword` occurs in an already tokenized text.
pub fn contains_keyword(tokens: &[String], keyword: &str) -> bool {
    let parts = tokenize(keyword);
    let Some((last, prefix)) = parts.split_last() else {
        return false;
    };
    if tokens.len() < parts.len() {
        return false;
    }

    (0..=tokens.len() - parts.len()).any(|start| {
        let window = &tokens[start..start + parts.len()];
        window[..prefix.len()]
            .iter()
            .zip(prefix)
            .all(|(token, part)| token == part)
            && window[prefix.len()].starts_with(last.as_str())
    })
}

/// Number of distinct keywords from `keywords` present in the tokens.
pub fn keyword_overlap(tokens: &[String], keywords: &[&str]) -> usize {
    let mut hits: Vec<&str> = Vec::new();
    for keyword in keywords {
        if !hits.contains(keyword) && contains_keyword(tokens, keyword) {
            hits.push(keyword);
        }
    }
    hits.len()
}

/// Overlap of every label with the text, in declaration order. Labels with
/// zero overlap are included so callers can inspect the whole table.
pub fn overlaps<L: Copy>(table: &KeywordTable<L>, text: &str) -> Vec<(L, usize)> {
    let tokens = tokenize(text);
    table
        .iter()
        .map(|(label, keywords)| (*label, keyword_overlap(&tokens, keywords)))
        .collect()
}

/// The label with the highest overlap. Ties go to the row declared first.
/// Returns `None` when no keyword matches at all.
pub fn best_match<L: Copy>(table: &KeywordTable<L>, text: &str) -> Option<L> {
    let mut best: Option<(L, usize)> = None;
    for (label, score) in overlaps(table, text) {
        if score == 0 {
            continue;
        }
        // Strictly greater: an equal score never displaces an earlier row.
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((label, score));
        }
    }
    best.map(|(label, _)| label)
}

/// Every label with at least one matching keyword, in declaration order.
pub fn all_matches<L: Copy>(table: &KeywordTable<L>, text: &str) -> Vec<L> {
    overlaps(table, text)
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .map(|(label, _)| label)
        .collect()
}

/// Canonical spelling of a capability name: trimmed, lower-case, with
/// whitespace and underscores collapsed into single dashes.
pub fn normalize_capability(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
