#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::cmp;

mod arena;
mod error;
mod fixed;
mod level;
mod node;
mod options;

/// A map implementation based on skiplist
pub mod map;


pub use error::Error;
pub use fixed::FixedVec;
pub use level::{Fixed, Geometric, LevelGenerator};
pub use map::{Cursor, CursorMut, SkipMap};
pub use options::Options;

/// The hard upper bound of levels a node can participate in.
///
/// [`Options::with_max_height`] may lower the bound for a single map, but never raise it.
pub const MAX_HEIGHT: usize = 32;

/// Comparator is used to define the order of the keys stored in a [`SkipMap`].
///
/// The comparator must be a strict weak order: two keys for which [`compare`](Comparator::compare)
/// returns [`Ordering::Equal`](cmp::Ordering::Equal) are considered the same key.
pub trait Comparator<K: ?Sized> {
  /// Compares two keys.
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering;

  /// Returns `true` if `a` is ordered strictly before `b`.
  #[inline]
  fn precedes(&self, a: &K, b: &K) -> bool {
    self.compare(a, b) == cmp::Ordering::Less
  }

  /// Returns `true` if neither key precedes the other.
  #[inline]
  fn equivalent(&self, a: &K, b: &K) -> bool {
    self.compare(a, b) == cmp::Ordering::Equal
  }
}

/// Ascend is a comparator that orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ascend;

impl<K: ?Sized + Ord> Comparator<K> for Ascend {
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    a.cmp(b)
  }
}

/// Descend is a comparator that orders keys in the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Descend;

impl<K: ?Sized + Ord> Comparator<K> for Descend {
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    b.cmp(a)
  }
}

impl<K, F> Comparator<K> for F
where
  K: ?Sized,
  F: Fn(&K, &K) -> cmp::Ordering,
{
  #[inline]
  fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
    self(a, b)
  }
}
