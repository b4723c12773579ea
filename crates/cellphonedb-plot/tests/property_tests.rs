//! Property-based tests for plot sizing and label rewriting

use cellphonedb_plot::pvalues::rewrite_header;
use cellphonedb_plot::selection::sanitize_names;
use cellphonedb_plot::PlotSize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn dot_plot_size_never_below_minimum(n_rows in 0usize..10_000, n_cols in -11i64..10_000) {
        let size = PlotSize::for_dot_plot(n_rows, n_cols);
        prop_assert!(size.width >= 8);
        prop_assert!(size.height >= 10);
    }

    #[test]
    fn dot_plot_size_grows_with_rows(n_rows in 0usize..10_000, n_cols in 0i64..100) {
        let smaller = PlotSize::for_dot_plot(n_rows, n_cols);
        let larger = PlotSize::for_dot_plot(n_rows + 2, n_cols);
        prop_assert!(larger.height >= smaller.height);
        prop_assert_eq!(larger.width, smaller.width);
    }

    #[test]
    fn rewritten_header_has_no_pipes_and_keeps_length(header in "[A-Za-z0-9_.|\t]{0,64}") {
        let rewritten = rewrite_header(&header);
        prop_assert!(!rewritten.contains('|'));
        prop_assert_eq!(rewritten.len(), header.len());
        prop_assert_eq!(rewritten.matches('.').count(), header.matches('|').count());
    }

    #[test]
    fn sanitized_names_keep_count(names in prop::collection::vec("[A-Za-z|.]{1,12}", 0..20)) {
        let sanitized = sanitize_names(&names);
        prop_assert_eq!(sanitized.len(), names.len());
        prop_assert!(sanitized.iter().all(|n| !n.contains('|')));
    }
}
