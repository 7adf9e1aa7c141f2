use infolex::{
    compress, compress_in_place, info, infomap, Error, InfoLimit, InfoMap, Lexer,
    BIG_INFO_STRING, MAX_INFO_STRING,
};

#[test]
fn test_set_then_get_round_trip() {
    let mut s = String::new();
    info::set_value(&mut s, "name", "Dave").unwrap();
    info::set_value(&mut s, "score", "10").unwrap();
    info::set_value(&mut s, "model", "ranger").unwrap();

    assert_eq!(info::value_for_key(&s, "name"), Some("Dave"));
    assert_eq!(info::value_for_key(&s, "score"), Some("10"));
    assert_eq!(info::value_for_key(&s, "model"), Some("ranger"));
}

#[test]
fn test_set_updates_existing_pair() {
    let mut s = String::from("\\a\\1");
    info::set_value(&mut s, "a", "2").unwrap();
    assert_eq!(s, "\\a\\2");
}

#[test]
fn test_set_empty_value_deletes() {
    let mut s = String::from("\\a\\1\\b\\2");
    info::set_value(&mut s, "a", "").unwrap();
    assert_eq!(s, "\\b\\2");
    assert_eq!(info::value_for_key(&s, "a"), None);
}

#[test]
fn test_invalid_key_is_rejected() {
    let mut s = String::from("\\a\\1");
    let err = info::set_value(&mut s, "bad;key", "v").unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
    assert_eq!(s, "\\a\\1");

    let err = info::set_value(&mut s, "", "v").unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
    assert_eq!(s, "\\a\\1");
}

#[test]
fn test_invalid_value_is_rejected() {
    let mut s = String::from("\\a\\1");
    for bad in ["has\"quote", "has;semi", "has\\slash"] {
        let err = info::set_value(&mut s, "key", bad).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(s, "\\a\\1");
    }
}

#[test]
fn test_remove_key_absent_is_identity() {
    let mut s = String::from("\\a\\1\\b\\2");
    assert_eq!(info::remove_key(&mut s, "c"), 0);
    assert_eq!(s, "\\a\\1\\b\\2");
}

#[test]
fn test_pairs_visit_in_order() {
    let s = "\\a\\1\\b\\2\\c\\3";
    let visited: Vec<_> = info::pairs(s).collect();
    assert_eq!(visited, vec![("a", "1"), ("b", "2"), ("c", "3")]);
}

#[test]
fn test_pairs_empty_string_is_terminal() {
    assert_eq!(info::pairs("").count(), 0);
    assert_eq!(info::pairs("\\").count(), 0);
}

#[test]
fn test_validate() {
    assert!(info::validate("\\name\\Dave"));
    assert!(!info::validate("has\"quote"));
    assert!(!info::validate("has;semi"));

    assert!(info::validate_key_value("plain"));
    assert!(!info::validate_key_value("back\\slash"));
}

#[test]
fn test_standard_tier_rejects_what_big_accepts() {
    let mut s = String::new();
    let value = "v".repeat(MAX_INFO_STRING);

    let err = info::set_value(&mut s, "key", &value).unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));
    assert_eq!(s, "");

    info::set_value_big(&mut s, "key", &value).unwrap();
    assert_eq!(s.len(), value.len() + "\\key\\".len());
    assert!(s.len() < BIG_INFO_STRING);
}

#[test]
fn test_fill_to_the_ceiling() {
    let mut s = String::new();
    let mut stored = 0;
    for i in 0.. {
        let key = format!("key{i}");
        match info::set_value(&mut s, &key, "0123456789abcdef") {
            Ok(()) => stored += 1,
            Err(Error::Overflow { .. }) => break,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(stored > 0);
    assert!(s.len() < MAX_INFO_STRING);
    // everything stored before the overflow is still retrievable
    assert_eq!(info::value_for_key(&s, "key0"), Some("0123456789abcdef"));
}

#[test]
fn test_info_map_preserves_wire_order() {
    let map = InfoMap::parse("\\z\\26\\a\\1\\m\\13");
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(
        map.encode(InfoLimit::Standard).unwrap(),
        "\\z\\26\\a\\1\\m\\13"
    );
}

#[test]
fn test_info_map_duplicate_keys_collapse() {
    let map = InfoMap::parse("\\a\\1\\A\\2");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some("2"));
}

#[test]
fn test_info_map_encode_validates() {
    let mut map = InfoMap::new();
    map.insert("key".to_string(), "bad;value".to_string());
    assert!(map.encode(InfoLimit::Standard).is_err());
}

#[test]
fn test_infomap_macro_with_codec() {
    let map = infomap! { "name" => "Dave", "score" => 10 };
    let wire = map.encode(InfoLimit::Standard).unwrap();
    assert_eq!(info::value_for_key(&wire, "SCORE"), Some("10"));
}

#[test]
fn test_compress_then_tokenize() {
    let raw = "weapon   /* id */  \"rocket launcher\"\n\n\ndamage\t100\n";
    let compressed = compress(raw);
    assert_eq!(compressed, "weapon \"rocket launcher\"\ndamage 100");

    // the compressed form tokenizes the same as the raw form
    let mut raw_lexer = Lexer::new(raw, "raw");
    let mut compact_lexer = Lexer::new(&compressed, "compact");
    loop {
        let a = raw_lexer.token();
        let b = compact_lexer.token();
        assert_eq!(a.as_str(), b.as_str());
        if a.is_empty() {
            break;
        }
    }
}

#[test]
fn test_compress_in_place_reports_length() {
    let mut buf = String::from("a  \t b // tail");
    let len = compress_in_place(&mut buf);
    assert_eq!(buf, "a b");
    assert_eq!(len, buf.len());
}

#[test]
fn test_serde_round_trip_for_info_map() {
    let map = infomap! { "name" => "Dave", "model" => "ranger" };
    let json = serde_json_style_round_trip(&map);
    assert_eq!(json, map);
}

// exercise the transparent serde impl without pulling in a format crate
fn serde_json_style_round_trip(map: &InfoMap) -> InfoMap {
    use serde::de::value::{Error, MapDeserializer};
    use serde::Deserialize;

    let pairs: indexmap::IndexMap<String, String> = map.clone().into();
    let deserializer: MapDeserializer<'_, _, Error> = MapDeserializer::new(pairs.into_iter());
    InfoMap::deserialize(deserializer).unwrap()
}
