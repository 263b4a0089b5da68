use proptest::prelude::*;
use tarn_std::text::{self, Text};

const INLINE_CAP: usize = 22;

proptest! {
    #[test]
    fn text_from_bytes_respects_inline_boundary(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let t = Text::from_bytes(&bytes);
        prop_assert_eq!(t.len(), bytes.len());
        prop_assert_eq!(t.as_bytes(), &bytes[..]);
        if bytes.len() <= INLINE_CAP {
            prop_assert!(matches!(t, Text::Inline { .. }), "expected Inline for len<=INLINE_CAP");
        } else {
            prop_assert!(matches!(t, Text::Heap { .. }), "expected Heap for len>INLINE_CAP");
        }
    }
}

proptest! {
    #[test]
    fn join_inverts_split_for_any_text(s in "[a-c,;]{0,24}", d in prop::sample::select(vec![",", ";", ",;"])) {
        let parts = text::split(&s, d);
        prop_assert!(!parts.is_empty());
        prop_assert_eq!(text::join(&parts, d), s.as_str());
    }

    #[test]
    fn split_inverts_join_when_parts_avoid_delimiter(parts in proptest::collection::vec("[a-z]{0,6}", 1..8)) {
        let joined = text::join(&parts, ",");
        let back = text::split(&joined, ",");
        prop_assert_eq!(back, parts.iter().map(|p| p.as_str()).collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn reverse_is_an_involution(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let twice = text::reverse(text::reverse(&bytes));
        prop_assert_eq!(twice.as_bytes(), &bytes[..]);
    }
}

proptest! {
    #[test]
    fn index_of_agrees_with_contains(s in "[ab]{0,12}", t in "[ab]{0,3}") {
        let idx = text::index_of(&s, &t);
        prop_assert_eq!(idx == text::NOT_FOUND, !text::contains(&s, &t));
        if idx >= 0 {
            let at = idx as usize;
            prop_assert_eq!(&s.as_bytes()[at..at + t.len()], t.as_bytes());
        }
    }

    #[test]
    fn last_index_of_finds_a_real_occurrence(s in "[ab]{0,12}", t in "[ab]{1,3}") {
        let idx = text::last_index_of(&s, &t);
        prop_assert_eq!(idx == text::NOT_FOUND, !text::contains(&s, &t));
        if idx >= 0 {
            prop_assert!(text::index_of(&s, &t) <= idx);
        }
    }
}

proptest! {
    #[test]
    fn slice_stays_within_bounds(s in "[a-z]{0,16}", start in -40i64..40, end in -40i64..40) {
        let out = text::slice(&s, start, end);
        let (lo, hi) = text::resolve_range(s.len(), start, end);
        prop_assert!(lo <= s.len() && hi <= s.len());
        if lo >= hi {
            prop_assert!(out.is_empty());
        } else {
            prop_assert_eq!(out.as_bytes(), &s.as_bytes()[lo..hi]);
        }
    }
}

proptest! {
    #[test]
    fn int_text_round_trips(n in any::<i64>()) {
        let rendered = text::from_int(n);
        prop_assert_eq!(rendered.to_string_lossy(), n.to_string());
        prop_assert_eq!(text::to_int(&rendered, 0), n);
    }

    #[test]
    fn float_text_round_trips(x in any::<f64>()) {
        prop_assume!(x.is_finite());
        let back = text::to_float(text::from_float(x), f64::NAN);
        prop_assert_eq!(back.to_bits(), x.to_bits());
    }
}
