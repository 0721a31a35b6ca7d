//! Tests for the item filter.

use super::*;
use catalog_api_rs::models::{Item, ItemQuery};

fn make_item(id: &str, name: &str, category: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        category: category.to_string(),
        price: 10.0,
        available: true,
        instructor: String::new(),
        duration: "1 week".to_string(),
        level: "Beginner".to_string(),
        tags: vec![],
        enrollment_count: None,
        rating: None,
    }
}

/// The two-item collection from the controller scenario.
fn scenario_items() -> Vec<Item> {
    let mut first = make_item("1", "Test Item 1", "Test Category");
    first.description = "Test description 1".to_string();
    first.tags = vec!["test".to_string(), "item".to_string()];

    let mut second = make_item("2", "Another Item", "Another Category");
    second.description = "Another description".to_string();
    second.tags = vec!["another".to_string()];
    second.available = false;

    vec![first, second]
}

fn courses() -> Vec<Item> {
    let mut web = make_item("1", "Introduction to Web Development", "Web Development");
    web.instructor = "Dr. Sarah Johnson".to_string();
    web.tags = vec!["html".to_string(), "css".to_string()];

    let mut react = make_item("2", "Advanced React & Redux", "Web Development");
    react.instructor = "Michael Chen".to_string();
    react.level = "Advanced".to_string();
    react.tags = vec!["react".to_string(), "frontend".to_string()];

    let mut data = make_item("3", "Data Science Fundamentals", "Data Science");
    data.instructor = "Dr. Emily Rodriguez".to_string();
    data.level = "Intermediate".to_string();
    data.tags = vec!["python".to_string(), "Machine Learning".to_string()];

    let mut design = make_item("4", "UX/UI Design Principles", "Design");
    design.instructor = "Alex Thompson".to_string();
    design.description = "Interface design for intuitive products".to_string();

    vec![web, react, data, design]
}

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// ==================== Empty Criteria ====================

#[test]
fn test_empty_query_returns_everything_in_order() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new());

    assert!(filter.is_unconstrained());
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_empty_strings_are_no_ops() {
    let items = courses();
    let query = ItemQuery::new()
        .search("")
        .category("")
        .level("")
        .instructor("");
    let filter = ItemFilter::new(&query);

    assert!(filter.is_unconstrained());
    assert_eq!(filter.filter_items(&items).len(), items.len());
}

#[test]
fn test_empty_collection() {
    let filter = ItemFilter::new(&ItemQuery::new().search("anything"));
    assert!(filter.filter_items(&[]).is_empty());
}

// ==================== Search Term ====================

#[test]
fn test_search_matches_name() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("Redux"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("rEdUx"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_search_matches_description() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("intuitive"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["4"]);
}

#[test]
fn test_search_matches_tag_substring() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("machine"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["3"]);

    let filter = ItemFilter::new(&ItemQuery::new().search("fronte"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_search_matches_instructor() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("thompson"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["4"]);
}

#[test]
fn test_search_matches_across_items_keeps_order() {
    let items = courses();
    // "Dr." appears in two instructors.
    let filter = ItemFilter::new(&ItemQuery::new().search("dr."));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1", "3"]);
}

#[test]
fn test_search_no_match() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().search("kubernetes"));
    assert!(filter.filter_items(&items).is_empty());
}

#[test]
fn test_search_unique_name_substring_selects_one_item() {
    let items = courses();
    for item in &items {
        let filter = ItemFilter::new(&ItemQuery::new().search(item.name.clone()));
        assert_eq!(ids(&filter.filter_items(&items)), vec![item.id.clone()]);
    }
}

// ==================== Category ====================

#[test]
fn test_category_exact_match() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().category("Web Development"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1", "2"]);
}

#[test]
fn test_category_case_insensitive() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().category("WEB DEVELOPMENT"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1", "2"]);
}

#[test]
fn test_category_is_not_substring() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().category("Web"));
    assert!(filter.filter_items(&items).is_empty());
}

// ==================== Level ====================

#[test]
fn test_level_case_insensitive_exact() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().level("advanced"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);

    let filter = ItemFilter::new(&ItemQuery::new().level("advan"));
    assert!(filter.filter_items(&items).is_empty());
}

// ==================== Instructor ====================

#[test]
fn test_instructor_substring() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().instructor("chen"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_instructor_does_not_match_other_fields() {
    let items = courses();
    // "React" is in item 2's name but no instructor contains it.
    let filter = ItemFilter::new(&ItemQuery::new().instructor("react"));
    assert!(filter.filter_items(&items).is_empty());
}

// ==================== Combination ====================

#[test]
fn test_criteria_combine_with_and() {
    let items = courses();
    // "python" only appears outside Web Development.
    let filter = ItemFilter::new(&ItemQuery::new().category("Web Development").search("python"));
    assert!(filter.filter_items(&items).is_empty());
}

#[test]
fn test_all_criteria_together() {
    let items = courses();
    let query = ItemQuery::new()
        .search("react")
        .category("web development")
        .level("ADVANCED")
        .instructor("michael");
    let filter = ItemFilter::new(&query);
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_matches_single_item() {
    let items = courses();
    let filter = ItemFilter::new(&ItemQuery::new().level("Intermediate"));
    assert!(filter.matches(&items[2]));
    assert!(!filter.matches(&items[0]));
}

// ==================== Scenario ====================

#[test]
fn test_scenario_search_test() {
    let items = scenario_items();
    let filter = ItemFilter::new(&ItemQuery::new().search("Test"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1"]);
}

#[test]
fn test_scenario_category_another() {
    let items = scenario_items();
    let filter = ItemFilter::new(&ItemQuery::new().category("Another Category"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["2"]);
}

#[test]
fn test_scenario_search_and_category() {
    let items = scenario_items();
    let filter = ItemFilter::new(&ItemQuery::new().search("test").category("Test Category"));
    assert_eq!(ids(&filter.filter_items(&items)), vec!["1"]);
}

// ==================== Owned Helper ====================

#[test]
fn test_filter_items_returns_owned_copies() {
    let items = courses();
    let result = filter_items(&items, &ItemQuery::new().category("design"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], items[3]);
}
