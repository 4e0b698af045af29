//! Element types with properties the plain integer patterns don't cover: large stack values and
//! values whose comparison is relatively expensive.

use std::cmp::Ordering;
use std::hint::black_box;

/// Very large stack value, moving it around is costly.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    values: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0i64; 128];
        let mut val_i64 = val as i64;

        for elem in &mut values {
            *elem = val_i64;
            val_i64 = black_box(val_i64 + 1);
        }

        Self { values }
    }

    fn key(&self) -> i64 {
        self.values[11] + self.values[55] + self.values[77]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// 16 byte value that is `Copy` but needs a division per comparison.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let x = val_f + 0.1;
        let y = val_f.log(4.1);

        assert!(y < x);
        assert!(x.is_normal() && y.is_normal());

        Self { x, y }
    }

    fn ratio(&self) -> f64 {
        self.x / self.y
    }
}

// Only normal floats get constructed, see `F128::new`.
impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio().total_cmp(&other.ratio())
    }
}
