use std::cmp::Ordering;

sort_impl!("gnome_unstable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    gnome_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    gnome_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with gnome sort, in the variant that remembers how far it already got.
///
/// The cursor `i` compares `v[i]` with its predecessor. An out of order pair is swapped and the
/// cursor steps back to follow the element. Once the element is in place, or the cursor hits the
/// front, the cursor jumps forward to `stop`, the first position not yet visited, instead of
/// walking back over the sorted prefix.
pub fn gnome_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut i = 1;
    let mut stop = 2;

    while i < len {
        if is_less(&v[i], &v[i - 1]) {
            v.swap(i - 1, i);
            i -= 1;
            if i == 0 {
                i = stop;
                stop += 1;
            }
        } else {
            i = stop;
            stop += 1;
        }
    }
}
