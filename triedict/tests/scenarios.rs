//! Integration tests exercising `Dict` end to end through its public API.

use triedict::{symbols, Dict};

fn encode(s: &str) -> Vec<u32> {
    symbols::encode_str(s).collect()
}

fn decode(symbols: &[u32]) -> String {
    triedict::symbols::decode_to_string(symbols).unwrap()
}

#[test]
fn key1_key2_lookup_and_reassignment() {
    let mut dict = Dict::new();
    dict.assign(encode("key1"), 0).unwrap();
    dict.assign(encode("key2"), 1).unwrap();
    dict.assign(encode("key2"), 11).unwrap();

    assert_eq!(dict.lookup(encode("key1")), Some(0));
    assert_eq!(dict.lookup(encode("key2")), Some(11));
    assert_eq!(dict.lookup(encode("key3")), None);
    assert!(dict.contains(encode("key1")));
    assert!(!dict.contains(encode("key3")));
}

#[test]
fn key1_key2_prefix_enumeration() {
    let mut dict = Dict::new();
    dict.assign(encode("key1"), 0).unwrap();
    dict.assign(encode("key2"), 1).unwrap();
    dict.assign(encode("key2"), 11).unwrap();

    let mut results: Vec<(String, u32)> = dict
        .prefix_enumerate(encode("ke"))
        .map(|(suffix, value)| (decode(&suffix), value))
        .collect();
    results.sort();

    assert_eq!(results, vec![("y1".to_string(), 0), ("y2".to_string(), 11)]);
}

#[test_log::test]
fn key1_key2_match_scan_over_text() {
    let mut dict = Dict::new();
    dict.assign(encode("key1"), 0).unwrap();
    dict.assign(encode("key2"), 1).unwrap();
    dict.assign(encode("key2"), 11).unwrap();

    let text = encode("this is key1 and key2key1 in a string");
    let hits: Vec<(usize, String, u32)> = dict
        .match_text(&text)
        .map(|hit| (hit.end_index, decode(&hit.pattern), hit.value))
        .collect();

    assert_eq!(
        hits,
        vec![
            (12, "key1".to_string(), 0),
            (20, "key2".to_string(), 11),
            (24, "key1".to_string(), 0),
        ]
    );
}

#[test]
fn key1_key2_match_scan_with_boundary_symbols() {
    let mut dict = Dict::new();
    dict.assign(encode("key1"), 0).unwrap();
    dict.assign(encode("key2"), 11).unwrap();

    let text = encode("this is key1 and key2key1 in a string");
    let boundary = encode(" .,;!?'\"()[]$=");
    let hits: Vec<usize> = dict
        .match_text_with_boundary(&text, &boundary)
        .map(|hit| hit.end_index)
        .collect();

    assert_eq!(hits, vec![12]);
}

#[test]
fn bus_bugs_share_a_prefix_without_crossing_branches() {
    let mut dict = Dict::new();
    dict.assign(encode("bus"), 1).unwrap();
    dict.assign(encode("bugs"), 2).unwrap();

    assert_eq!(dict.lookup(encode("bus")), Some(1));
    assert_eq!(dict.lookup(encode("bugs")), Some(2));
    assert_eq!(dict.lookup(encode("bug")), None);
    assert_eq!(dict.lookup(encode("bu")), None);

    let text = encode("the bus has bugs");
    let hits: Vec<(usize, String)> = dict
        .match_text(&text)
        .map(|hit| (hit.end_index, decode(&hit.pattern)))
        .collect();
    assert_eq!(hits, vec![(7, "bus".to_string()), (16, "bugs".to_string())]);
}

#[test]
fn serialize_then_deserialize_preserves_behavior() {
    let mut dict = Dict::new();
    dict.assign(encode("she"), 1).unwrap();
    dict.assign(encode("he"), 2).unwrap();
    dict.assign(encode("hers"), 3).unwrap();
    dict.prepare();

    let bytes = dict.to_bytes();
    let mut restored = Dict::deserialize(&bytes[..]).unwrap();
    assert!(!restored.links_stale());

    let text = encode("ushers");
    let before: Vec<_> = dict.clone().match_text(&text).collect();
    let after: Vec<_> = restored.match_text(&text).collect();
    assert_eq!(before, after);
}

#[test]
fn deserialize_rejects_garbage_input() {
    let err = Dict::deserialize(&b"not a dictionary"[..]).unwrap_err();
    assert!(matches!(err, triedict::Error::CorruptSerializedData(_)));
}

#[test]
fn empty_pattern_and_reserved_symbol_are_rejected() {
    let mut dict = Dict::new();
    assert_eq!(dict.assign(Vec::new(), 0), Err(triedict::Error::EmptyKey));
    assert_eq!(dict.assign([0u32], 0), Err(triedict::Error::ReservedSymbol));
}
