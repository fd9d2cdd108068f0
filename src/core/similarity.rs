/// Similarity ratio between two strings in the range 0.0..=1.0
///
/// Gestalt pattern matching (Ratcliff/Obershelp): the longest common block is
/// matched first, then the unmatched parts on either side are matched
/// recursively. The ratio is `2 * matched / (len(a) + len(b))`.
///
/// # Arguments
/// * `a` - Candidate word
/// * `b` - Word being looked up
///
/// # Returns
/// 1.0 for identical strings (including two empty ones), 0.0 when nothing matches
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Find the closest word to `word` among `candidates`
///
/// Only candidates with a ratio of at least `cutoff` qualify. The highest
/// ratio wins; on ties the first candidate encountered is kept.
pub fn closest_match<'a, I>(word: &str, candidates: I, cutoff: f64) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        // Cheap upper bound before the full comparison
        if length_bound(candidate, word) < cutoff {
            continue;
        }

        let ratio = similarity_ratio(candidate, word);
        if ratio < cutoff {
            continue;
        }

        match best {
            Some((_, best_ratio)) if best_ratio >= ratio => {}
            _ => best = Some((candidate, ratio)),
        }
    }

    best
}

/// Upper bound of the ratio based only on the lengths
#[inline]
fn length_bound(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    let total = la + lb;
    if total == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f64 / total as f64
}

/// Total number of characters covered by the matching blocks
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`
///
/// Among blocks of maximal length the one starting earliest in `a` wins, then
/// the one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // lengths[j] = length of the common suffix ending at a[i - 1], b[j - 1]
    let mut lengths = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut next = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = lengths[j - blo] + 1;
            next[j - blo + 1] = k;
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        lengths = next;
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity_ratio("excel", "excel"), 1.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_typo_ratio() {
        // "exce" + "l" matched out of 6 + 5 characters
        let ratio = similarity_ratio("exceel", "excel");
        assert!((ratio - 10.0 / 11.0).abs() < 1e-9, "got {}", ratio);
    }

    #[test]
    fn test_recursion_on_both_sides() {
        // "bcd" first, then "a" on the left and "e" on the right
        let ratio = similarity_ratio("abcde", "axbcdye");
        assert!((ratio - 10.0 / 12.0).abs() < 1e-9, "got {}", ratio);
    }

    #[test]
    fn test_non_ascii_counts_chars() {
        let ratio = similarity_ratio("français", "francais");
        assert!((ratio - 14.0 / 16.0).abs() < 1e-9, "got {}", ratio);
    }

    #[test]
    fn test_closest_match_respects_cutoff() {
        let words = ["learn", "exceel", "office"];
        let found = closest_match("excel", words.iter().copied(), 0.8);
        assert_eq!(found.map(|(w, _)| w), Some("exceel"));

        let missing = closest_match("powerpoint", words.iter().copied(), 0.8);
        assert!(missing.is_none());
    }

    #[test]
    fn test_closest_match_prefers_higher_ratio() {
        let words = ["excelll", "exel", "excell"];
        let (word, ratio) = closest_match("excel", words.iter().copied(), 0.8).unwrap();
        assert_eq!(word, "excell");
        assert!(ratio > 0.9);
    }
}
