/// Generates a URL slug from a display name.
///
/// Danish letters are transliterated (`æ` → `ae`, `ø` → `oe`, `å` → `aa`),
/// everything is lowercased, and runs of non-alphanumeric characters collapse
/// into single hyphens with no leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    let mut text = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        match ch {
            'æ' => text.push_str("ae"),
            'ø' => text.push_str("oe"),
            'å' => text.push_str("aa"),
            'ä' | 'á' | 'à' | 'â' => text.push('a'),
            'é' | 'è' | 'ê' | 'ë' => text.push('e'),
            'í' | 'ì' | 'ï' => text.push('i'),
            'ö' | 'ó' | 'ò' | 'ô' => text.push('o'),
            'ü' | 'ú' | 'ù' => text.push('u'),
            'ç' => text.push('c'),
            'a'..='z' | '0'..='9' => text.push(ch),
            _ => text.push(' '),
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn it_transliterates_danish_letters() {
        assert_eq!(slugify("Børn & Leg"), "boern-leg");
        assert_eq!(slugify("Kælebørste"), "kaeleboerste");
        assert_eq!(slugify("Gå-i-byen tøj"), "gaa-i-byen-toej");
    }

    #[test]
    fn it_collapses_punctuation_runs() {
        assert_eq!(slugify("  Mode --- & Accessories!  "), "mode-accessories");
        assert_eq!(slugify("Café, vin & spiritus"), "cafe-vin-spiritus");
    }

    #[test]
    fn it_handles_empty_and_symbol_only_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
