use crate::common::reconstruct;
use linediff::{DiffOptions, compare};
use proptest::prelude::*;

// a small alphabet so that generated documents share lines
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[ab \t]{0,3}", 0..12).prop_map(|lines| lines.join("\n"))
}

fn options_strategy() -> impl Strategy<Value = DiffOptions> {
    (any::<bool>(), any::<bool>(), prop::option::of(0usize..4)).prop_map(
        |(show_space, relaxed_space, context)| DiffOptions {
            show_space,
            relaxed_space,
            context,
            ..DiffOptions::default()
        },
    )
}

proptest! {
    #[test]
    fn prop_identical_documents_have_no_changes(
        document in document_strategy(),
        options in options_strategy(),
    ) {
        let report = compare(document.as_str(), document.as_str(), &options).unwrap();
        prop_assert_eq!(report.change_count(), 0);
    }

    #[test]
    fn prop_differing_documents_have_changes(
        actual in document_strategy(),
        expected in document_strategy(),
    ) {
        prop_assume!(actual != expected);

        let report = compare(actual.as_str(), expected.as_str(), &DiffOptions::default()).unwrap();
        prop_assert!(report.change_count() >= 1);
    }

    #[test]
    fn prop_reports_are_deterministic(
        actual in document_strategy(),
        expected in document_strategy(),
        options in options_strategy(),
    ) {
        let first = compare(actual.as_str(), expected.as_str(), &options).unwrap();
        let second = compare(actual.as_str(), expected.as_str(), &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_full_report_reconstructs_both_sides(
        actual in document_strategy(),
        expected in document_strategy(),
    ) {
        let report = compare(actual.as_str(), expected.as_str(), &DiffOptions::default()).unwrap();

        prop_assert_eq!(reconstruct(&report, "- "), actual);
        prop_assert_eq!(reconstruct(&report, "+ "), expected);
    }

    #[test]
    fn prop_context_never_shows_more_lines(
        actual in document_strategy(),
        expected in document_strategy(),
        context in 0usize..4,
    ) {
        let full = compare(actual.as_str(), expected.as_str(), &DiffOptions::default()).unwrap();
        let windowed = compare(
            actual.as_str(),
            expected.as_str(),
            &DiffOptions::default().with_context(context),
        )
        .unwrap();

        let content_lines = windowed.lines().iter().filter(|line| *line != "  ⋮").count();
        prop_assert!(content_lines <= full.lines().len());
        prop_assert_eq!(windowed.change_count(), full.change_count());
    }
}
