//! Free-text hand notation → strategy table key.
//!
//! `normalize` never fails. Input it cannot canonicalize comes back unchanged
//! and is rejected later when the table lookup misses.

use crate::range_engine::models::rank_index;

/// Canonicalize `raw` (already trimmed) into `"88"`, `"AKs"` or `"AKo"` form.
///
/// - Ranks are uppercased and ordered by [`RANK_ORDER`](super::models::RANK_ORDER),
///   higher first. Characters that are not ranks sort below every rank.
/// - Pairs drop any trailing character.
/// - Non-pairs keep a lowercased `s`/`o` suffix. Anything else returns `raw`.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != 2 && chars.len() != 3 {
        return raw.to_string();
    }

    let mut hi = chars[0].to_ascii_uppercase();
    let mut lo = chars[1].to_ascii_uppercase();
    if rank_index(hi) < rank_index(lo) {
        std::mem::swap(&mut hi, &mut lo);
    }

    if hi == lo {
        return [hi, lo].iter().collect();
    }

    match chars.get(2).map(|c| c.to_ascii_lowercase()) {
        Some(suit @ ('s' | 'o')) => [hi, lo, suit].iter().collect(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_rank_goes_first() {
        assert_eq!(normalize("KAs"), "AKs");
        assert_eq!(normalize("AKs"), "AKs");
        assert_eq!(normalize("9To"), "T9o");
        assert_eq!(normalize("2As"), "A2s");
    }

    #[test]
    fn table_order_not_ascii_order() {
        // ASCII puts '9' before 'T' and 'K' before 'Q'; table order does not.
        assert_eq!(normalize("t9s"), "T9s");
        assert_eq!(normalize("QKo"), "KQo");
        assert_eq!(normalize("JTs"), "JTs");
    }

    #[test]
    fn case_insensitive_ranks_and_suit() {
        assert_eq!(normalize("ako"), "AKo");
        assert_eq!(normalize("q5S"), "Q5s");
        assert_eq!(normalize("Ko"), "Ko");
    }

    #[test]
    fn pairs_drop_suffix() {
        assert_eq!(normalize("88"), "88");
        assert_eq!(normalize("tt"), "TT");
        assert_eq!(normalize("88s"), "88");
        assert_eq!(normalize("QQx"), "QQ");
    }

    #[test]
    fn wrong_length_passes_through() {
        assert_eq!(normalize("8h8c"), "8h8c");
        assert_eq!(normalize("A"), "A");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("AKsx"), "AKsx");
    }

    #[test]
    fn bad_suffix_returns_original_input() {
        assert_eq!(normalize("kax"), "kax");
        assert_eq!(normalize("ak"), "ak");
        assert_eq!(normalize("AK"), "AK");
    }

    #[test]
    fn idempotent_over_mixed_inputs() {
        let inputs = [
            "KAs", "ako", "q5S", "88", "8h8c", "tt", "x5s", "5Xs", "kax", "ak",
            "", "A", "99o", "T9", "zz", "ÄKs", "  ", "a2O",
        ];
        for raw in inputs {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
