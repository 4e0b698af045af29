use std::cell::Cell;
use std::env;

use once_cell::sync::OnceCell;
use regex::Regex;

pub fn pin_thread_to_core() {
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Returns false if `CUSTOM_BENCH_REGEX` is set and does not match `name`.
pub fn is_bench_name_ok(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX")
            .ok()
            .map(|filter_regex| Regex::new(&filter_regex).unwrap())
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

pub fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

pub fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;

    v.shuffle(&mut rand::thread_rng());
    v
}
