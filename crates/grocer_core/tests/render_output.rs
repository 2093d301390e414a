use grocer_core::{FrequencyStore, DEFAULT_HISTOGRAM_SYMBOL, NO_DATA_LINE};
use pretty_assertions::assert_eq;

fn sample_store() -> FrequencyStore {
    let mut store = FrequencyStore::new();
    store.record_text("apple\nbanana apple\norange apple banana");
    store
}

#[test]
fn render_all_aligns_counts() {
    let expected = "\
apple         3
banana        2
orange        1
";
    assert_eq!(sample_store().render_all(), expected);
}

#[test]
fn histogram_repeats_symbol_per_count() {
    let expected = "\
apple         ***
banana        **
orange        *
";
    assert_eq!(
        sample_store().render_histogram(DEFAULT_HISTOGRAM_SYMBOL),
        expected
    );
}

#[test]
fn histogram_uses_requested_symbol() {
    let rendered = sample_store().render_histogram('#');
    let bars: Vec<_> = rendered
        .lines()
        .map(|line| line.chars().filter(|c| *c == '#').count())
        .collect();
    assert_eq!(bars, vec![3, 2, 1]);
}

#[test]
fn long_items_widen_the_column() {
    let mut store = FrequencyStore::new();
    store.record_text("Cranberry_Sauce_Jar kiwi kiwi");

    let rendered = store.render_all();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[0], "Cranberry_Sauce_Jar  1");
    assert_eq!(lines[1], format!("{:<21}2", "kiwi"));
}

#[test]
fn rows_are_strictly_increasing() {
    let mut store = FrequencyStore::new();
    store.record_text("yams beets onions beets apples yams zucchini");

    for rendered in [store.render_all(), store.render_histogram('*')] {
        let items: Vec<_> = rendered
            .lines()
            .map(|line| line.split_whitespace().next().unwrap_or_default().to_string())
            .collect();
        assert!(items.windows(2).all(|pair| pair[0] < pair[1]), "{items:?}");
        assert_eq!(items.len(), 5);
    }
}

#[test]
fn empty_store_renders_single_notice() {
    let store = FrequencyStore::new();
    assert_eq!(store.render_all(), format!("{NO_DATA_LINE}\n"));
    assert_eq!(store.render_histogram('*'), format!("{NO_DATA_LINE}\n"));
}
