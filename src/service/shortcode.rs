use regex::{Captures, Regex};
use zino::prelude::*;

/// Expands `[widget:<id>]` tokens into webshop fragments.
///
/// Tokens referencing a known entry are replaced with a rendered fragment
/// of its display fields; tokens referencing an unknown id are removed.
/// All surrounding text is preserved byte-for-byte.
pub fn expand(body: &str, entries: &[Map]) -> String {
    WIDGET_PATTERN
        .replace_all(body, |captures: &Captures| {
            captures[1]
                .parse::<i64>()
                .ok()
                .and_then(|id| entries.iter().find(|entry| entry.get_i64("id") == Some(id)))
                .map(render_widget)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Renders a single webshop fragment.
fn render_widget(entry: &Map) -> String {
    let name = entry.get_str("name").unwrap_or_default();
    let slug = entry.get_str("slug").unwrap_or_default();
    let mut fragment = format!(
        "<div class=\"webshop-widget\"><a href=\"/shop/{slug}\">{name}</a>",
    );
    if let Some(logo_url) = entry.get_str("logo_url").filter(|url| !url.is_empty()) {
        fragment.push_str(&format!("<img src=\"{logo_url}\" alt=\"{name}\">"));
    }
    if let Some(discount) = entry.get_str("discount_text").filter(|text| !text.is_empty()) {
        fragment.push_str(&format!("<span class=\"discount\">{discount}</span>"));
    }
    fragment.push_str("</div>");
    fragment
}

/// Embedded webshop tokens in rich text.
static WIDGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[widget:(\d+)\]").expect("fail to create a regex for widget tokens")
});

#[cfg(test)]
mod tests {
    use super::expand;
    use zino::prelude::*;

    fn sample_entries() -> Vec<Map> {
        [
            json!({
                "id": 7,
                "name": "Nordlys Interiør",
                "slug": "nordlys-interioer",
                "logo_url": "https://cdn.example.dk/nordlys.png",
                "discount_text": "10% med koden NORD10",
            }),
            json!({
                "id": 12,
                "name": "Tekstil Torvet",
                "slug": "tekstil-torvet",
            }),
        ]
        .into_iter()
        .filter_map(|value| value.into_map_opt())
        .collect()
    }

    #[test]
    fn it_replaces_tokens_with_webshop_fragments() {
        let entries = sample_entries();
        let body = "Se udvalget hos [widget:7] inden udsalget slutter.";
        let expanded = expand(body, &entries);
        assert!(expanded.starts_with("Se udvalget hos <div class=\"webshop-widget\">"));
        assert!(expanded.contains("<a href=\"/shop/nordlys-interioer\">Nordlys Interiør</a>"));
        assert!(expanded.contains("10% med koden NORD10"));
        assert!(expanded.ends_with(" inden udsalget slutter."));
    }

    #[test]
    fn it_removes_tokens_for_unknown_entries() {
        let entries = sample_entries();
        let body = "Før [widget:999] efter";
        assert_eq!(expand(body, &entries), "Før  efter");
    }

    #[test]
    fn it_preserves_text_without_tokens() {
        let entries = sample_entries();
        let body = "Ingen tokens her, heller ikke [widget:] eller [gadget:7].";
        assert_eq!(expand(body, &entries), body);
    }

    #[test]
    fn it_expands_multiple_tokens_in_order() {
        let entries = sample_entries();
        let body = "[widget:12] og [widget:7]";
        let expanded = expand(body, &entries);
        let first = expanded.find("tekstil-torvet").unwrap();
        let second = expanded.find("nordlys-interioer").unwrap();
        assert!(first < second);
        assert!(expanded.contains(" og "));
    }
}
