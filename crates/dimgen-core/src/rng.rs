//! Portable lagged-Fibonacci pseudo-random number generator.
//!
//! This is the subtractive generator from Knuth Vol. 2, §3.2.2
//! (Algorithm A), popularized by Bentley's "Software Exploratorium"
//! column. It produces an identical stream of integers in
//! `[0, PRAND_MAX)` on any architecture, regardless of word size or
//! rounding behavior, which is the only property the instance
//! generators rely on: two runs with the same seed must emit
//! byte-identical instances. It makes no claim to statistical quality
//! and is not suitable for anything security-related.

/// Exclusive upper bound of the raw output range.
pub const PRAND_MAX: i64 = 1_000_000_000;

/// Number of history slots in the lag buffer.
const LAG: usize = 55;

/// Draws discarded after seeding, before the stream is handed out.
const WARMUP_DRAWS: usize = 165;

/// A seeded, owned generator state: the 55-slot history buffer plus two
/// rotating cursors. There are no globals; callers thread a
/// `&mut PortableRng` through the generation call graph.
#[derive(Debug, Clone)]
pub struct PortableRng {
    arr: [i64; LAG],
    a: usize,
    b: usize,
}

impl PortableRng {
    /// Seeds a new generator.
    ///
    /// Any seed is valid, including zero and negative values; the seed
    /// is first reduced into `[0, PRAND_MAX)` so every subsequent value
    /// stays in range. The buffer is filled through the `(21 * i) % 55`
    /// index permutation, then 165 draws are discarded to let the
    /// recurrence settle.
    pub fn new(seed: i64) -> Self {
        let seed = seed.rem_euclid(PRAND_MAX);
        let mut arr = [0_i64; LAG];
        arr[0] = seed;
        let mut last = seed;
        let mut next = 1_i64;
        for i in 1..LAG {
            let ii = (21 * i) % LAG;
            arr[ii] = next;
            next = last - next;
            if next < 0 {
                next += PRAND_MAX;
            }
            last = arr[ii];
        }

        let mut rng = PortableRng { arr, a: 0, b: 24 };
        for _ in 0..WARMUP_DRAWS {
            rng.next_raw();
        }
        rng
    }

    /// Returns the next raw value in `[0, PRAND_MAX)`.
    ///
    /// Both cursors tick down by one position *before* use, wrapping
    /// from 0 back to 54; the wrap decision is made on the old cursor
    /// value, each call. The difference of the two history entries
    /// (plus the modulus when negative) both becomes the output and
    /// overwrites the `a` slot.
    pub fn next_raw(&mut self) -> i64 {
        self.a = if self.a == 0 { LAG - 1 } else { self.a - 1 };
        self.b = if self.b == 0 { LAG - 1 } else { self.b - 1 };

        let mut t = self.arr[self.a] - self.arr[self.b];
        if t < 0 {
            t += PRAND_MAX;
        }
        self.arr[self.a] = t;
        t
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
