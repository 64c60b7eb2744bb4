//! Mirrored suggestion derivation
//!
//! Placeholder autocomplete: every entry echoes the raw query until a real
//! completion source is plugged in.

/// Number of mirrored entries shown above the input
pub const MIRROR_COUNT: usize = 3;

/// One derived entry of the mirrored panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredSuggestion {
    /// 1-based position, stable for a given query
    pub id: usize,
    pub text: String,
}

/// Derive the mirrored panel for `query`.
///
/// Blank queries (empty or whitespace-only) produce no entries, which hides
/// the panel. Otherwise exactly [`MIRROR_COUNT`] entries carry the query
/// verbatim, surrounding whitespace included.
pub fn mirror(query: &str) -> Vec<MirroredSuggestion> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    (1..=MIRROR_COUNT)
        .map(|id| MirroredSuggestion {
            id,
            text: query.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_nothing() {
        assert!(mirror("").is_empty());
    }

    #[test]
    fn whitespace_query_yields_nothing() {
        for q in [" ", "   ", "\t", "\n ", "\u{3000}"] {
            assert!(mirror(q).is_empty(), "query {:?} should be blank", q);
        }
    }

    #[test]
    fn echoes_query_three_times() {
        for q in ["cat", "Top Stories", " padded ", "日本語", "a"] {
            let entries = mirror(q);
            assert_eq!(entries.len(), MIRROR_COUNT);
            assert!(entries.iter().all(|e| e.text == q));
        }
    }

    #[test]
    fn ids_are_one_based_and_ordered() {
        let ids: Vec<usize> = mirror("news").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn deterministic() {
        assert_eq!(mirror("wordle"), mirror("wordle"));
    }
}
