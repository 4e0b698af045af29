//! Classic comparison sorts over mutable slices.
//!
//! Every algorithm lives in its own module and exposes the same surface:
//!
//! - `sort(v)` sorts by the natural order of `T: Ord`,
//! - `sort_by(v, compare)` sorts with a comparator returning [`Ordering`](std::cmp::Ordering),
//! - a predicate entry point named after the algorithm, e.g. [`unstable::heap::heapsort`], which
//!   takes `is_less: &mut F` with `F: FnMut(&T, &T) -> bool`. `is_less` must describe a strict
//!   weak ordering. The algorithms compose through these entry points.
//! - `SortImpl`, implementing [`sort_test_tools::Sort`] for the shared test suite and benchmarks.
//!
//! Only [`stable::merge`] keeps equal elements in their original order. Comb sort is the only
//! sort with a fallible entry point, see [`unstable::comb::comb_sort`].
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Rejected arguments are logged through `tracing::error`, the introsort heapsort fallback through `tracing::debug`. If this feature is not enabled, nothing is logged. | [`tracing`]
//! | `large_test_sizes` | Adds 100k and 1m element inputs to the shared test suite. |
//!
//! [`tracing`]: https://docs.rs/tracing

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_test_len() -> usize {
                $max_test_len
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod error;
pub mod partition;
pub mod stable;
pub mod unstable;

pub use error::SortError;
