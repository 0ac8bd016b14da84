use zino::prelude::*;

/// Groups search results by entity kind for the results-type selector.
///
/// Each group carries its entries and a count; the `total` field sums
/// the counts across all kinds.
pub fn group_results(shops: Vec<Map>, categories: Vec<Map>, posts: Vec<Map>) -> Map {
    let total = shops.len() + categories.len() + posts.len();
    let mut results = Map::new();
    results.upsert("shops", group(shops));
    results.upsert("categories", group(categories));
    results.upsert("posts", group(posts));
    results.upsert("total", total);
    results
}

fn group(entries: Vec<Map>) -> Map {
    let mut group = Map::new();
    group.upsert("count", entries.len());
    group.upsert("entries", entries);
    group
}

#[cfg(test)]
mod tests {
    use super::group_results;
    use zino::prelude::*;

    #[test]
    fn it_groups_results_by_entity_kind() {
        let shops = vec![
            Map::from_entry("name", "Nordlys Interiør"),
            Map::from_entry("name", "Tekstil Torvet"),
        ];
        let categories = vec![Map::from_entry("name", "Bolig")];
        let posts = Vec::new();
        let results = group_results(shops, categories, posts);

        let shop_group = results.get_object("shops").unwrap();
        assert_eq!(shop_group.get_usize("count"), Some(2));
        assert_eq!(shop_group.get_array("entries").map(|e| e.len()), Some(2));
        let category_group = results.get_object("categories").unwrap();
        assert_eq!(category_group.get_usize("count"), Some(1));
        let post_group = results.get_object("posts").unwrap();
        assert_eq!(post_group.get_usize("count"), Some(0));
        assert_eq!(results.get_usize("total"), Some(3));
    }

    #[test]
    fn it_counts_an_empty_result_set() {
        let results = group_results(Vec::new(), Vec::new(), Vec::new());
        assert_eq!(results.get_usize("total"), Some(0));
        let shop_group = results.get_object("shops").unwrap();
        assert!(shop_group.get_array("entries").unwrap().is_empty());
    }
}
