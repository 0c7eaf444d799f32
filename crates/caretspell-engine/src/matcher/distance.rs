// Edit distance between comparison keys

/// Levenshtein distance counted in chars: the minimum number of
/// single-character insertions, deletions or substitutions turning `a`
/// into `b`. A transposition counts as two edits.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Returns `true` if `a` and `b` are exactly `distance` edits apart.
///
/// `a_len` is the char length of `a`, passed in because callers compare
/// one word against many entries. Pairs whose lengths already differ by
/// more than `distance` are rejected without running the full distance.
pub fn is_at_distance(a: &str, a_len: usize, b: &str, distance: usize) -> bool {
    let b_len = b.chars().count();
    if a_len.abs_diff(b_len) > distance {
        return false;
    }
    edit_distance(a, b) == distance
}
