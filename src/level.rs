use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::MAX_HEIGHT;

/// Precompute the skiplist probabilities so that only a single random number
/// needs to be generated and so that the optimal pvalue can be used (inverse
/// of Euler's number).
const PROBABILITIES: [u32; MAX_HEIGHT] = {
  const P: f64 = 1.0 / core::f64::consts::E;

  let mut probabilities = [0; MAX_HEIGHT];
  let mut p = 1f64;

  let mut i = 0;
  while i < MAX_HEIGHT {
    probabilities[i] = ((u32::MAX as f64) * p) as u32;
    p *= P;
    i += 1;
  }

  probabilities
};

/// Decides which level a newly inserted node reaches.
///
/// A node with level `n` participates in levels `0..=n`. The [`SkipMap`](crate::SkipMap)
/// clamps every generated level to its configured
/// [`max_height`](crate::Options::max_height) minus one, so implementors do not need to
/// know the bound of the map they feed.
///
/// Besides [`Geometric`] and [`Fixed`], any `FnMut() -> usize` closure is a level generator,
/// which makes it easy to force a specific tower layout in tests.
pub trait LevelGenerator {
  /// Returns the level of the next node to insert.
  fn next_level(&mut self) -> usize;
}

/// The default level generator, drawing levels in `[1, MAX_HEIGHT - 1]` from a
/// geometric distribution with `p = 1/e`, so every level is roughly `e` times
/// sparser than the one below it.
///
/// Level `0` is never drawn, so every node also sits on level `1`. Lane `1`
/// repeats lane `0`, each node carries at least two links, and every search
/// walks one level more than the distribution alone would need. Use [`Fixed`] or
/// a closure when the lowest levels matter.
#[derive(Debug, Clone)]
pub struct Geometric {
  rng: SmallRng,
}

impl Default for Geometric {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Geometric {
  /// Creates a generator seeded from the operating system.
  #[inline]
  pub fn new() -> Self {
    Self {
      rng: SmallRng::from_os_rng(),
    }
  }

  /// Creates a generator with a fixed seed, producing the same levels on every run.
  #[inline]
  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: SmallRng::seed_from_u64(seed),
    }
  }
}

impl LevelGenerator for Geometric {
  #[inline]
  fn next_level(&mut self) -> usize {
    let rnd: u32 = self.rng.random();
    let mut h = 1;

    while h < MAX_HEIGHT - 1 && rnd <= PROBABILITIES[h] {
      h += 1;
    }
    h
  }
}

/// A level generator that always returns the same level.
///
/// `Fixed::new(0)` turns the skipmap into a plain sorted linked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed(usize);

impl Fixed {
  /// Creates a generator that always returns `level`.
  #[inline]
  pub const fn new(level: usize) -> Self {
    Self(level)
  }

  /// Returns the level this generator produces.
  #[inline]
  pub const fn level(&self) -> usize {
    self.0
  }
}

impl LevelGenerator for Fixed {
  #[inline]
  fn next_level(&mut self) -> usize {
    self.0
  }
}

impl<F> LevelGenerator for F
where
  F: FnMut() -> usize,
{
  #[inline]
  fn next_level(&mut self) -> usize {
    self()
  }
}
