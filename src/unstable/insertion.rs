use std::cmp::Ordering;

sort_impl!("insertion_unstable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with insertion sort, which is *O*(*n*^2) worst-case.
///
/// Every element is binary searched into the sorted prefix in front of it and rotated into place.
/// It lands after all the entries it is not less than, so equal elements keep their order, even
/// though the module is grouped with the unstable sorts.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let (sorted, rest) = v.split_at(i);
        let key = &rest[0];
        let pos = sorted.partition_point(|elem| !is_less(key, elem));

        // `v[pos..i]` moves one slot right and `v[i]` lands at `pos`.
        v[pos..=i].rotate_right(1);
    }
}
