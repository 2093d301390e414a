use grocer_core::FrequencyStore;

const SAMPLE: &str = "apple\nbanana apple\norange apple banana";

#[test]
fn counts_sample_basket() {
    let mut store = FrequencyStore::new();
    assert_eq!(store.record_text(SAMPLE), 6);

    assert_eq!(store.frequency_of("apple"), 3);
    assert_eq!(store.frequency_of("banana"), 2);
    assert_eq!(store.frequency_of("orange"), 1);
    assert_eq!(store.frequency_of("grape"), 0);
    assert_eq!(store.len(), 3);
}

#[test]
fn total_matches_token_count() {
    let text = "  Peas\tPeas  Zucchini\r\nCilantro \n\n Peas Yams\u{0B}Yams ";
    let mut store = FrequencyStore::new();
    let counted = store.record_text(text);

    assert_eq!(counted, 7);
    assert_eq!(store.total(), 7);
    assert_eq!(store.frequency_of("Peas"), 3);
    assert_eq!(store.frequency_of("Yams"), 2);
}

#[test]
fn lookup_is_exact_match() {
    let mut store = FrequencyStore::new();
    store.record_text("Apple apple");

    assert_eq!(store.frequency_of("Apple"), 1);
    assert_eq!(store.frequency_of("apple"), 1);
    assert_eq!(store.frequency_of("APPLE"), 0);
    assert_eq!(store.frequency_of(" apple"), 0);
}

#[test]
fn whitespace_only_tokens_are_skipped() {
    let mut store = FrequencyStore::new();
    assert!(!store.record("\u{A0}"));
    assert!(!store.record(""));
    assert!(store.record("\u{A0}kale\u{A0}"));

    assert_eq!(store.frequency_of("kale"), 1);
    assert_eq!(store.total(), 1);
}

#[test]
fn entries_are_lexicographic() {
    let mut store = FrequencyStore::new();
    store.record_text("pear Zucchini apple banana Apple");

    let items: Vec<_> = store.entries().map(|(item, _)| item).collect();
    assert_eq!(items, vec!["Apple", "Zucchini", "apple", "banana", "pear"]);
}

#[test]
fn clear_empties_the_store() {
    let mut store = FrequencyStore::new();
    store.record_text(SAMPLE);
    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.frequency_of("apple"), 0);
}

#[test]
fn column_width_grows_with_longest_item() {
    let mut store = FrequencyStore::new();
    assert_eq!(store.column_width(), 14);

    store.record("apple");
    assert_eq!(store.column_width(), 14);

    store.record("Pomegranate_Seeds");
    assert_eq!(store.column_width(), 19);

    store.record("crème_brûlée_mix");
    assert_eq!(store.column_width(), 19);
}
