use zino::prelude::*;

/// A single filter predicate applicable to a list of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// Entries tagged with a category slug.
    Category(String),
    /// Danish-owned webshops.
    DanishOwned,
    /// Webshops certified by e-mærket.
    Emaerket,
    /// Webshops certified by Tryghedsmærket.
    Tryghedsmaerket,
    /// Webshops accepting MobilePay.
    Mobilepay,
}

impl Facet {
    /// Extracts the active facet from the query parameters.
    ///
    /// At most one facet can be active: a `category` slug takes precedence,
    /// otherwise the `facet` parameter names one of the known predicates.
    /// Unknown predicate names are rejected.
    pub fn from_query(query: &Map) -> Result<Option<Self>, Error> {
        if let Some(slug) = query.get_str("category").filter(|s| !s.is_empty()) {
            return Ok(Some(Self::Category(slug.to_owned())));
        }
        match query.get_str("facet") {
            Some("danish") => Ok(Some(Self::DanishOwned)),
            Some("emaerket") => Ok(Some(Self::Emaerket)),
            Some("tryghedsmaerket") => Ok(Some(Self::Tryghedsmaerket)),
            Some("mobilepay") => Ok(Some(Self::Mobilepay)),
            Some(name) if !name.is_empty() => Err(Error::new(format!("unknown facet `{name}`"))),
            _ => Ok(None),
        }
    }

    /// Returns `true` if the catalog entry satisfies the facet.
    pub fn matches(&self, entry: &Map) -> bool {
        match self {
            Self::Category(slug) => entry
                .parse_str_array("categories")
                .is_some_and(|tags| tags.contains(&slug.as_str())),
            Self::DanishOwned => entry.get_bool("danish_owned").unwrap_or_default(),
            Self::Emaerket => entry.get_bool("emaerket").unwrap_or_default(),
            Self::Tryghedsmaerket => entry.get_bool("tryghedsmaerket").unwrap_or_default(),
            Self::Mobilepay => entry.get_bool("mobilepay").unwrap_or_default(),
        }
    }
}

/// Filters catalog entries by the active facet, preserving relative order.
/// No facet selects every entry unchanged.
pub fn filter_entries(entries: Vec<Map>, facet: Option<&Facet>) -> Vec<Map> {
    match facet {
        Some(facet) => entries
            .into_iter()
            .filter(|entry| facet.matches(entry))
            .collect(),
        None => entries,
    }
}

#[cfg(test)]
mod tests {
    use super::{Facet, filter_entries};
    use zino::prelude::*;

    fn sample_entries() -> Vec<Map> {
        [
            json!({
                "id": 1,
                "name": "Nordlys Interiør",
                "categories": ["bolig"],
                "emaerket": true,
                "danish_owned": true,
                "mobilepay": false,
            }),
            json!({
                "id": 2,
                "name": "Tekstil Torvet",
                "categories": ["mode", "bolig"],
                "emaerket": false,
                "danish_owned": false,
                "mobilepay": true,
            }),
            json!({
                "id": 3,
                "name": "Legeland Online",
                "categories": ["boern-leg"],
                "emaerket": true,
                "tryghedsmaerket": true,
                "danish_owned": true,
                "mobilepay": true,
            }),
        ]
        .into_iter()
        .filter_map(|value| value.into_map_opt())
        .collect()
    }

    #[test]
    fn it_returns_all_entries_without_a_facet() {
        let entries = sample_entries();
        let filtered = filter_entries(entries.clone(), None);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn it_keeps_matching_entries_in_order() {
        let entries = sample_entries();
        let filtered = filter_entries(entries, Some(&Facet::Emaerket));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].get_i64("id"), Some(1));
        assert_eq!(filtered[1].get_i64("id"), Some(3));
        for entry in &filtered {
            assert!(Facet::Emaerket.matches(entry));
        }
    }

    #[test]
    fn it_matches_category_slugs() {
        let entries = sample_entries();
        let facet = Facet::Category("bolig".to_owned());
        let filtered = filter_entries(entries, Some(&facet));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].get_i64("id"), Some(1));
        assert_eq!(filtered[1].get_i64("id"), Some(2));
    }

    #[test]
    fn it_yields_an_empty_sequence_when_nothing_matches() {
        let entries = sample_entries();
        let facet = Facet::Category("elektronik".to_owned());
        let filtered = filter_entries(entries, Some(&facet));
        assert!(filtered.is_empty());
    }

    #[test]
    fn it_parses_known_facets_and_rejects_unknown_ones() {
        let query = Map::from_entry("facet", "mobilepay");
        assert_eq!(Facet::from_query(&query).unwrap(), Some(Facet::Mobilepay));

        let query = Map::from_entry("category", "mode");
        let facet = Facet::from_query(&query).unwrap();
        assert_eq!(facet, Some(Facet::Category("mode".to_owned())));

        let query = Map::from_entry("facet", "free-shipping");
        assert!(Facet::from_query(&query).is_err());

        assert_eq!(Facet::from_query(&Map::new()).unwrap(), None);
    }
}
