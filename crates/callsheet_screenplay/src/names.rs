//! Fuzzy matching of character names across independently written sources.

/// Case-insensitive, punctuation-insensitive character name matcher.
///
/// Sources such as story bibles, cast lists and screenplay cues spell the
/// same character differently (`"JACE"`, `"Jace Castro"`, `"jace"`). Two
/// names match when, after normalization, any of these holds in order:
///
/// 1. they are equal;
/// 2. one contains the other and the shorter is at least 3 characters;
/// 3. their first words are equal and at least 3 characters.
///
/// Rule 3 links distinct characters sharing a first name ("John Smith" and
/// "John Doe"). This is a known limitation and is left in place.
///
/// # Examples
///
/// ```
/// use callsheet_screenplay::NameMatcher;
///
/// assert!(NameMatcher::matches("Jace", "Jace Castro"));
/// assert!(NameMatcher::matches("MARISOL (V.O.)", "Marisol"));
/// assert!(!NameMatcher::matches("A", "Alice"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

/// Shortest normalized name allowed to match by containment or first word.
const MIN_FUZZY_LEN: usize = 3;

impl NameMatcher {
    /// Lower-case, strip punctuation and collapse whitespace.
    pub fn normalize(name: &str) -> String {
        let stripped: String = name
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Whether two names refer to the same character.
    pub fn matches(a: &str, b: &str) -> bool {
        let a = Self::normalize(a);
        let b = Self::normalize(b);
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a == b {
            return true;
        }

        let (shorter, longer) = if a.chars().count() <= b.chars().count() {
            (&a, &b)
        } else {
            (&b, &a)
        };
        if shorter.chars().count() >= MIN_FUZZY_LEN && longer.contains(shorter.as_str()) {
            return true;
        }

        match (a.split(' ').next(), b.split(' ').next()) {
            (Some(first_a), Some(first_b)) => {
                first_a == first_b && first_a.chars().count() >= MIN_FUZZY_LEN
            }
            _ => false,
        }
    }

    /// Whether free text mentions a character by full name or first name.
    ///
    /// The first name counts only when it is at least 3 characters.
    ///
    /// ```
    /// use callsheet_screenplay::NameMatcher;
    ///
    /// assert!(NameMatcher::mentions("Jace ties off the boat.", "Jace Castro"));
    /// assert!(!NameMatcher::mentions("Al waves.", "Al Brandt"));
    /// ```
    pub fn mentions(text: &str, name: &str) -> bool {
        let haystack = text.to_lowercase();
        let full = name.trim().to_lowercase();
        if full.is_empty() {
            return false;
        }
        if full.chars().count() >= MIN_FUZZY_LEN && haystack.contains(&full) {
            return true;
        }
        Self::normalize(name)
            .split(' ')
            .next()
            .filter(|first| first.chars().count() >= MIN_FUZZY_LEN)
            .is_some_and(|first| haystack.contains(first))
    }

    /// Whether any name in `names` matches `name`.
    pub fn contains<S: AsRef<str>>(names: &[S], name: &str) -> bool {
        names.iter().any(|n| Self::matches(n.as_ref(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_whitespace() {
        assert_eq!(NameMatcher::normalize("  O'Brien,   Kate "), "obrien kate");
        assert_eq!(NameMatcher::normalize("DR. VOSS"), "dr voss");
        assert_eq!(NameMatcher::normalize("..."), "");
    }

    #[test]
    fn empty_names_never_match() {
        assert!(!NameMatcher::matches("", ""));
        assert!(!NameMatcher::matches("--", "Jace"));
    }
}
