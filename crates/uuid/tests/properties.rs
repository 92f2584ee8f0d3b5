use proptest::prelude::*;

use uuidkit::{Format, Uuid, MAX_TEXT_LEN};

fn any_uuid() -> impl Strategy<Value = Uuid> {
    any::<[u8; 16]>().prop_map(Uuid::from_bytes)
}

fn any_format() -> impl Strategy<Value = Format> {
    prop::sample::select(Format::ALL.to_vec())
}

proptest! {
    #[test]
    fn text_round_trips_in_every_layout(uuid in any_uuid(), format in any_format()) {
        let text = uuid.to_string_as(format);
        let letter = format.to_string();

        prop_assert_eq!(text.len(), format.text_len());
        prop_assert_eq!(Uuid::parse(&text).unwrap(), uuid);
        prop_assert_eq!(Uuid::parse_exact(&text, &letter).unwrap(), uuid);
        prop_assert_eq!(Uuid::try_parse(&text), Some(uuid));
    }

    #[test]
    fn utf16_round_trips_in_every_layout(uuid in any_uuid(), format in any_format()) {
        let mut wide = [0u16; MAX_TEXT_LEN];
        let written = uuid.try_format_utf16(&mut wide, &format.to_string()).unwrap();

        prop_assert_eq!(written, format.text_len());
        prop_assert_eq!(Uuid::parse_utf16(&wide[..written]).unwrap(), uuid);
        prop_assert_eq!(
            Uuid::try_parse_exact_utf16(&wide[..written], &format.to_string()),
            Some(uuid)
        );
    }

    #[test]
    fn parsing_ignores_case(uuid in any_uuid(), format in any_format()) {
        let upper = uuid.to_string_as(format).to_ascii_uppercase();
        prop_assert_eq!(Uuid::parse(&upper).unwrap(), uuid);
        prop_assert_eq!(Uuid::parse_exact(&upper, &format.to_string()).unwrap(), uuid);
    }

    #[test]
    fn output_is_lowercase(uuid in any_uuid(), format in any_format()) {
        let text = uuid.to_string_as(format);
        prop_assert!(!text.chars().any(|c| c.is_ascii_uppercase()), "{}", text);
    }

    #[test]
    fn order_matches_bytes_and_n_text(a in any_uuid(), b in any_uuid()) {
        prop_assert_eq!(a.cmp(&b), a.as_bytes().cmp(b.as_bytes()));
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
        prop_assert_eq!(a == b, a.as_bytes() == b.as_bytes());
        prop_assert_eq!(b.cmp(&a), a.cmp(&b).reverse());
    }

    #[test]
    fn order_is_transitive(a in any_uuid(), b in any_uuid(), c in any_uuid()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn equal_values_hash_equal(bytes in any::<[u8; 16]>()) {
        let a = Uuid::from_bytes(bytes);
        let b = Uuid::from_slice(&bytes).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn any_corrupted_position_is_rejected(
        uuid in any_uuid(),
        format in any_format(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut text = uuid.to_string_as(format).into_bytes();
        let position = index.index(text.len());
        text[position] = b'g';

        prop_assert_eq!(Uuid::try_parse_utf8(&text), None);
        prop_assert!(Uuid::parse_utf8(&text).is_err());
        prop_assert_eq!(Uuid::try_parse_utf8(&text).unwrap_or_default(), Uuid::EMPTY);
    }

    #[test]
    fn short_buffers_are_left_untouched(
        uuid in any_uuid(),
        format in any_format(),
        len in 0usize..32,
    ) {
        let mut dest = vec![b'#'; len];
        prop_assert_eq!(uuid.try_format_utf8(&mut dest, &format.to_string()), None);
        prop_assert!(dest.iter().all(|&b| b == b'#'));
    }
}
