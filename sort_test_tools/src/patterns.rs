//! Input patterns for testing and benchmarking the sorts. All patterns produce i32 values,
//! callers map them into other types while preserving their relative order.
//!
//! Every random pattern derives its rng from one seed per process, printed by the test suite.
//! Set `OVERRIDE_SEED` to replay a failing run.

use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Mutex;

use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seed();
    let dist = ZipfDistribution::new(len.max(1), exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| Direction::Ascending)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| Direction::Descending)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let saw_directions = random_uniform(saw_count.max(1) + 1, 0..=1);

    saws(len, saw_count, |i| {
        Direction::from_coin(saw_directions[i % saw_directions.len()])
    })
}

pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Ascending and descending runs with random direction and a length picked from `range`.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let max_chunks = len / range.start.max(1);
    let saw_directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut start = 0;
    for (i, chunk_len) in chunk_lens.iter().enumerate() {
        if start >= len {
            break;
        }

        let end = std::cmp::min(start + *chunk_len as usize, len);
        Direction::from_coin(saw_directions[i]).apply(&mut vals[start..end]);
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    Direction::Ascending.apply(first_half);
    Direction::Descending.apply(second_half);

    vals
}

/// Makes every call to a random pattern yield fresh values, instead of the same values for the
/// whole process. Benchmarks should call this once before generating inputs.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

#[derive(Copy, Clone)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn from_coin(coin: i32) -> Self {
        match coin {
            0 => Self::Ascending,
            1 => Self::Descending,
            _ => unreachable!(),
        }
    }

    fn apply(self, chunk: &mut [i32]) {
        match self {
            Self::Ascending => chunk.sort_unstable(),
            Self::Descending => chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e)),
        }
    }
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        if let Some(override_seed) = env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
        {
            (SeedType::ExternalOverride, override_seed)
        } else {
            (SeedType::RandomOncePerProcess, thread_rng().gen())
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_seed() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn saws(len: usize, saw_count: usize, direction_of: impl Fn(usize) -> Direction) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        direction_of(i).apply(chunk);
    }

    vals
}
