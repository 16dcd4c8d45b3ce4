//! URL slugs for output file names

use deunicode::deunicode_with_tofu;

/// Lowercase ASCII slug with `-` separators.
///
/// Non-ASCII text is transliterated (`Café` → `cafe`, Devanagari → Latin
/// letters); characters with no transliteration act as separators.
/// Apostrophes are removed and digit groups like `5,000` join to `5000`.
pub fn slugify(text: &str) -> String {
    let folded: String = deunicode_with_tofu(text, " ")
        .chars()
        .filter(|c| *c != '\'')
        .collect::<String>()
        .to_lowercase();

    let chars: Vec<char> = folded.chars().collect();
    let mut slug = String::with_capacity(chars.len());
    let mut pending_dash = false;
    for (i, &c) in chars.iter().enumerate() {
        let digit_group =
            c == ',' && i > 0 && is_digit_at(&chars, i - 1) && is_digit_at(&chars, i + 1);
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if !digit_group {
            pending_dash = true;
        }
    }
    slug
}

fn is_digit_at(chars: &[char], index: usize) -> bool {
    chars.get(index).is_some_and(|c| c.is_ascii_digit())
}
