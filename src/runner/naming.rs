//! Case label to filesystem name derivation, and back to display names.
//!
//! Labels may carry accents, Unicode dashes, and spaces; output directories
//! and files use a plain ASCII slug so the tree is portable. The reverse
//! mapping (for the aggregation pass, which only sees file names) replaces
//! separators with spaces and title-cases the words.

/// Fold a character to its unaccented ASCII form. Non-ASCII characters
/// without a fold are dropped, like an NFKD-then-ASCII-encode pass.
fn fold_char(ch: char) -> Option<char> {
    let folded = match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        c if c.is_ascii() => c,
        _ => return None,
    };
    Some(folded)
}

/// Derive the output directory/file name for a case label: lower-case,
/// accents stripped to ASCII, spaces replaced with `_`, Unicode dashes
/// normalized to `-`.
pub fn case_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for ch in label.chars() {
        let mapped = match ch {
            '\u{2013}' | '\u{2014}' => '-',
            ' ' => '_',
            other => match fold_char(other) {
                Some(folded) => folded,
                None => continue,
            },
        };
        slug.push(mapped.to_ascii_lowercase());
    }
    slug
}

/// Derive a display name from a result file stem: separators become
/// spaces, each word is title-cased.
pub fn display_name(stem: &str) -> String {
    let spaced = stem.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    for (i, word) in spaced.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases_and_separates() {
        assert_eq!(case_slug("Stellar Black Hole"), "stellar_black_hole");
    }

    #[test]
    fn test_slug_strips_accents() {
        assert_eq!(case_slug("Próximo do Horizonte"), "proximo_do_horizonte");
        assert_eq!(case_slug("Ação Çedilha"), "acao_cedilha");
    }

    #[test]
    fn test_slug_normalizes_unicode_dashes() {
        assert_eq!(case_slug("Case 1 \u{2013} Neutron Star"), "case_1_-_neutron_star");
        assert_eq!(case_slug("Case 2 \u{2014} Collapse"), "case_2_-_collapse");
    }

    #[test]
    fn test_slug_drops_unfoldable_characters() {
        assert_eq!(case_slug("Mass M\u{2609} Test"), "mass_m_test");
    }

    #[test]
    fn test_display_name_round_trip_texture() {
        assert_eq!(
            display_name("case_1_-_neutron_star"),
            "Case 1 - Neutron Star"
        );
        assert_eq!(display_name("stellar_black_hole"), "Stellar Black Hole");
    }
}
