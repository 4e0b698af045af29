#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::stable::merge as test_sort;
use classic_sort_fuzz::{bytes_as_i32, check_against_std};

fuzz_target!(|data: &[u8]| {
    check_against_std(data.to_vec(), test_sort::sort);
    check_against_std(bytes_as_i32(data), test_sort::sort);

    // Only the high nibble is compared, the original index must stay ascending within each key.
    let mut keyed: Vec<(u8, usize)> = data.iter().map(|b| b >> 4).zip(0..).collect();
    test_sort::sort_by(&mut keyed, |a, b| a.0.cmp(&b.0));
    assert!(keyed
        .windows(2)
        .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1)));
});
