use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    /// Largest input the shared test suite will hand to this sort. Sorts that are slower than
    /// *O*(*n* \* log(*n*)) override this to keep the suite runtime reasonable.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod types;
