use iex_rs::SymbolDirectory;
use std::collections::BTreeSet;

fn directory() -> SymbolDirectory {
    SymbolDirectory::from_entries([
        ("AAPL", "Apple Inc."),
        ("FB", "Facebook Inc."),
        ("GOOG", "Alphabet Inc."),
        ("PINE", "Pineapple Holdings"),
        ("msft", "Microsoft Corporation"),
    ])
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn normalize_uppercases_and_drops_unknown() {
    let dir = directory();
    assert_eq!(dir.normalize(["AAPL", "ZZZZZZ"]), set(&["AAPL"]));
    assert_eq!(dir.normalize(["aapl", "fb", "zzaa"]), set(&["AAPL", "FB"]));
    assert_eq!(dir.normalize([" goog "]), set(&["GOOG"]));
}

#[test]
fn normalize_deduplicates() {
    let dir = directory();
    assert_eq!(dir.normalize(["aapl", "AAPL", "Aapl"]), set(&["AAPL"]));
}

#[test]
fn normalize_of_nothing_known_is_empty() {
    let dir = directory();
    assert!(dir.normalize(Vec::<String>::new()).is_empty());
    assert!(dir.normalize(["", "nope", "ZZZZ"]).is_empty());
}

#[test]
fn normalize_is_idempotent_and_within_the_directory() {
    let dir = directory();
    let inputs: [&[&str]; 4] = [
        &["aapl", "msft", "bogus"],
        &["PINE", "pine", "fb"],
        &[],
        &["x", "y", "goog"],
    ];
    for input in inputs {
        let once = dir.normalize(input);
        let twice = dir.normalize(&once);
        assert_eq!(once, twice);
        assert!(once.iter().all(|s| dir.contains(s)));
    }
}

#[test]
fn keys_are_stored_upper_case() {
    let dir = directory();
    assert!(dir.contains("MSFT"));
    assert!(dir.contains("msft"));
    assert_eq!(dir.len(), 5);
}

#[test]
fn name_of_returns_only_known_symbols() {
    let dir = directory();
    let names = dir.name_of(["aapl", "fb", "zzaa"]);

    assert_eq!(names.len(), 2);
    assert_eq!(names["AAPL"], "Apple Inc.");
    assert_eq!(names["FB"], "Facebook Inc.");
    assert!(!names.contains_key("ZZAA"));
}

#[test]
fn name_of_single_symbol() {
    let names = directory().name_of(["aapl"]);
    assert_eq!(names.get("AAPL").map(String::as_str), Some("Apple Inc."));
}

#[test]
fn search_matches_names_case_insensitively() {
    let found = directory().search("apple");
    assert!(found.contains_key("AAPL"));
    assert!(found.contains_key("PINE"), "Pineapple contains 'apple'");
    assert_eq!(found.len(), 2);
}

#[test]
fn search_matches_symbols_case_insensitively() {
    let dir = directory();
    assert!(dir.search("goog").contains_key("GOOG"));
    assert!(dir.search("GOOG").contains_key("GOOG"));
    assert!(dir.search("FACEBOOK").contains_key("FB"));
}

#[test]
fn search_without_matches_is_empty() {
    assert!(directory().search("no such company").is_empty());
}

#[test]
fn all_labels_every_symbol() {
    let all = directory().all();

    assert_eq!(all.len(), 5);
    assert_eq!(all[0].symbol, "AAPL");
    assert_eq!(all[0].label, "AAPL - Apple Inc.");
    assert!(all.iter().any(|l| l.label == "MSFT - Microsoft Corporation"));
}
