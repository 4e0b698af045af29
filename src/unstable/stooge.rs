use std::cmp::Ordering;

sort_impl!("stooge_unstable", 300);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stooge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stooge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with stooge sort, roughly *O*(*n*^2.71).
///
/// Swaps the ends if they are out of order, then sorts the first two thirds, the last two thirds
/// and the first two thirds again. Both windows are `len - len / 3` long and overlap by at least a
/// third, which is what makes the three rounds sufficient for every length.
pub fn stooge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if is_less(&v[len - 1], &v[0]) {
        v.swap(0, len - 1);
    }

    if len > 2 {
        let third = len / 3;
        stooge_sort(&mut v[..len - third], is_less);
        stooge_sort(&mut v[third..], is_less);
        stooge_sort(&mut v[..len - third], is_less);
    }
}
