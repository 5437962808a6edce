//! Free-text start-node resolution.

/// Resolve a free-text title against `(search_key, node)` candidates.
///
/// Matching is case-insensitive. An exact key match wins outright.
/// Otherwise a candidate matches when the title contains its key or its key
/// contains the title; among those the longest key wins, and remaining ties
/// go to the earliest candidate. Candidates must therefore be supplied in
/// authored catalog order.
///
/// Returns `None` when nothing matches (including an empty title); the
/// caller supplies its own default.
pub fn resolve_start<K: Copy>(candidates: &[(&str, K)], title: &str) -> Option<K> {
    let needle = title.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    for &(key, node) in candidates {
        if key.to_lowercase() == needle {
            return Some(node);
        }
    }

    let mut best: Option<(usize, K)> = None;
    for &(key, node) in candidates {
        let key = key.to_lowercase();
        if key.is_empty() {
            continue;
        }
        if needle.contains(&key) || key.contains(&needle) {
            match best {
                Some((best_len, _)) if best_len >= key.len() => {}
                _ => best = Some((key.len(), node)),
            }
        }
    }

    best.map(|(_, node)| node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIPS: &[(&str, u32)] = &[
        ("Pythagorean Theorem", 0),
        ("Derivatives", 1),
        ("Unit Circle", 2),
        ("Matrix Operations", 3),
        ("Eigenvalues", 4),
    ];

    #[test]
    fn test_title_containing_key() {
        assert_eq!(resolve_start(CLIPS, "Understanding Derivatives"), Some(1));
    }

    #[test]
    fn test_key_containing_title() {
        assert_eq!(resolve_start(CLIPS, "matrix"), Some(3));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_start(CLIPS, "UNIT circle"), Some(2));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve_start(CLIPS, "Organic Chemistry"), None);
        assert_eq!(resolve_start(CLIPS, ""), None);
        assert_eq!(resolve_start(CLIPS, "   "), None);
    }

    #[test]
    fn test_exact_match_beats_longer_substring() {
        let candidates = &[("Unit Circle", 0_u32), ("Circle", 1)];
        assert_eq!(resolve_start(candidates, "circle"), Some(1));
    }

    #[test]
    fn test_longest_key_wins_among_substrings() {
        assert_eq!(
            resolve_start(CLIPS, "derivatives and matrix operations"),
            Some(3)
        );
    }

    #[test]
    fn test_ties_resolve_to_earliest_candidate() {
        let candidates = &[("alpha", 0_u32), ("gamma", 1)];
        assert_eq!(resolve_start(candidates, "alpha then gamma"), Some(0));
    }
}
