use std::cmp::Ordering;

sort_impl!("bubble_unstable", 2_048);

/// Sorts `v` with bubble sort, *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` by sweeping adjacent pairs from left to right.
///
/// Each pass moves the greatest remaining element to the end of the unsorted part, so the next
/// pass looks at one element less. Stops after the first pass that performs no swap, which means
/// a sorted input costs exactly `len - 1` comparisons.
pub fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = v.len();

    while end > 1 {
        let mut swapped = false;

        for i in 1..end {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        end -= 1;
    }
}
