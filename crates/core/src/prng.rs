//! Seeded pseudo-random stream used for trait selection.
//!
//! The generator is a 32-bit polynomial string hash feeding a small linear
//! congruential step. It is not statistically strong; its only job is to
//! make the same seed select the same traits everywhere, including in
//! artifacts minted before this crate existed, so the arithmetic below must
//! stay bit-compatible.

/// LCG multiplier.
const LCG_MULTIPLIER: i64 = 9301;
/// LCG increment.
const LCG_INCREMENT: i64 = 49297;
/// LCG modulus; also the divisor that maps state onto a float.
const LCG_MODULUS: i64 = 233_280;

/// Classic `hash * 31 + code_unit` rolling hash over UTF-16 code units,
/// wrapped to a signed 32-bit integer at each step.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Deterministic number stream derived from a string seed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self {
            state: i64::from(seed_hash(seed)),
        }
    }

    /// Advance the stream and return `state / 233280`.
    ///
    /// The remainder keeps the sign of the dividend, so a seed with a
    /// negative hash produces draws in `(-1, 0]` for as long as the state
    /// stays negative. Use [`pick_index`](Self::pick_index) to map a draw
    /// onto a table.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Draw an index into a table of `len` entries: `|floor(r * len)| mod len`.
    ///
    /// Returns 0 for an empty table without consuming a draw.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.next_f64() * len as f64).floor() as i64;
        scaled.unsigned_abs() as usize % len
    }

    /// Pick an element of `items`, or `None` when it is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index)
    }
}
