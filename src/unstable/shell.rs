use std::cmp::Ordering;

sort_impl!("shell_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with Shell's original gap sequence `len / 2, len / 4, ..., 1`.
///
/// For every gap, each of the interleaved subsequences is insertion sorted by swapping an element
/// backwards while it is less than the one `gap` positions before it. The last round with gap 1 is
/// a plain insertion sort over an almost sorted slice.
pub fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j - gap, j);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
