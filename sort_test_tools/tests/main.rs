// Runs the shared suite against the standard library sort, so a failure in here points at the
// suite itself and not at a sort implementation.

use std::cmp::Ordering;

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_by(compare);
    }
}

instantiate_sort_tests!(SortImpl);
