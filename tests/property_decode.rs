// tests/property_decode.rs

use proptest::prelude::*;
use script_runner::exec::decode::decode_text;

proptest! {
    #[test]
    fn text_without_cr_is_unchanged(s in "[^\r]*") {
        prop_assert_eq!(decode_text(s.as_bytes()).unwrap(), s);
    }

    #[test]
    fn decoded_text_never_contains_cr(s in any::<String>()) {
        let decoded = decode_text(s.as_bytes()).unwrap();
        prop_assert!(!decoded.contains('\r'));
    }

    #[test]
    fn line_count_is_preserved_for_crlf(lines in proptest::collection::vec("[a-z ]{0,8}", 0..20)) {
        let crlf: String = lines.iter().map(|l| format!("{l}\r\n")).collect();
        let lf: String = lines.iter().map(|l| format!("{l}\n")).collect();
        prop_assert_eq!(decode_text(crlf.as_bytes()).unwrap(), lf);
    }

    #[test]
    fn invalid_utf8_is_always_rejected(prefix in "[a-z]{0,8}", suffix in "[a-z]{0,8}") {
        let mut bytes = prefix.into_bytes();
        bytes.push(0xff);
        bytes.extend(suffix.into_bytes());
        prop_assert!(decode_text(&bytes).is_err());
    }
}
