#[macro_export]
macro_rules! infomap {
    // Handle empty map
    () => {
        $crate::InfoMap::new()
    };

    // Handle key/value entries with optional trailing comma
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::InfoMap::new();
        $(
            map.insert($key.to_string(), $value.to_string());
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::{InfoLimit, InfoMap};

    #[test]
    fn test_infomap_macro_empty() {
        assert_eq!(infomap!(), InfoMap::new());
    }

    #[test]
    fn test_infomap_macro_entries() {
        let map = infomap! {
            "name" => "Dave",
            "score" => 10,
        };

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some("Dave"));
        assert_eq!(map.get("score"), Some("10"));
    }

    #[test]
    fn test_infomap_macro_encodes() {
        let map = infomap! { "a" => 1, "b" => 2 };
        assert_eq!(map.encode(InfoLimit::Standard).unwrap(), "\\a\\1\\b\\2");
    }
}
