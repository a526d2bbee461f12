use proptest::prelude::*;
use scoremap::data::io_csv::from_csv_str;
use scoremap::data::io_lines::from_lines_str;
use scoremap::ScoremapError;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn lines_reader_recovers_dataset(dataset in proptest_helpers::arb_dataset(500, 50)) {
        let text = proptest_helpers::to_lines_text(&dataset);
        let parsed = from_lines_str(&text).expect("parse lines");
        prop_assert_eq!(parsed, dataset);
    }

    #[test]
    fn csv_reader_matches_lines_reader(dataset in proptest_helpers::arb_dataset(500, 50)) {
        let quoted = from_csv_str(&proptest_helpers::to_quoted_csv_text(&dataset)).expect("parse csv");
        let plain = from_lines_str(&proptest_helpers::to_lines_text(&dataset)).expect("parse lines");
        prop_assert_eq!(quoted, plain);
    }

    #[test]
    fn reparse_is_deterministic(dataset in proptest_helpers::arb_dataset(500, 50)) {
        let text = proptest_helpers::to_lines_text(&dataset);
        let first = from_lines_str(&text).expect("first parse");
        let second = from_lines_str(&text).expect("second parse");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bad_token_reports_its_line(
        dataset in proptest_helpers::arb_dataset(100, 20),
        token in "[a-z]{1,6}",
    ) {
        let mut text = proptest_helpers::to_lines_text(&dataset);
        text.push_str(&format!("12,{token}\n"));

        match from_lines_str(&text) {
            Err(ScoremapError::MalformedRecord { line, .. }) => {
                prop_assert_eq!(line, dataset.len() as u64 + 1);
            }
            other => prop_assert!(false, "expected malformed record, got {:?}", other),
        }
    }
}
