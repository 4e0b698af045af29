use std::cmp::Ordering;

sort_impl!("heap_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Does not allocate, and is the fallback of [`introsort`](crate::unstable::intro::introsort)
/// once its depth budget runs out.
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Max-heap, every parent is not less than its children.
    let mut sift_down = |v: &mut [T], mut node| loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Pick the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    };

    // Heapify bottom-up, starting at the last parent.
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node);
    }

    // Move the root behind the shrinking heap.
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    }
}
