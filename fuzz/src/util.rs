//! Input decoding shared by the fuzz targets.

/// Reads `data` as little-endian `i32`s, trailing bytes that do not fill a value are dropped.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts a copy of `v` with `slice::sort` and asserts that `sort_fn` yields the same result.
pub fn check_against_std<T: Ord + Clone + std::fmt::Debug>(v: Vec<T>, sort_fn: fn(&mut [T])) {
    let mut expected = v.clone();
    expected.sort();

    let mut got = v;
    sort_fn(&mut got);

    assert_eq!(got, expected);
}
