#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::unstable::intro as test_sort;
use classic_sort_fuzz::{bytes_as_i32, check_against_std};

fuzz_target!(|data: &[u8]| {
    // Raw bytes give many duplicates, the i32 view mostly distinct values.
    check_against_std(data.to_vec(), test_sort::sort);
    check_against_std(bytes_as_i32(data), test_sort::sort);
});
