/// Lower-cases `s` after dropping every whitespace character.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and whitespace-insensitive comparison of a requested identifier
/// against a catalog entry name.
pub fn matches(requested: &str, candidate_name: &str) -> bool {
    let mut left = requested
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase);
    let mut right = candidate_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase);

    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a == b => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}
