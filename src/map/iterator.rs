use core::iter::FusedIterator;
use std::vec::Vec;

use super::super::{
  arena::Arena,
  node::{Node, NodeId},
};

/// An iterator over the entries of a [`SkipMap`](super::SkipMap), in order.
pub struct Iter<'a, K, V> {
  arena: &'a Arena<K, V>,
  node: NodeId,
  tail: NodeId,
  len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K, V>, first: NodeId, tail: NodeId, len: usize) -> Self {
    Self {
      arena,
      node: first,
      tail,
      len,
    }
  }
}

impl<K, V> Clone for Iter<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self { ..*self }
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    if self.node == self.tail {
      return None;
    }

    let nd = self.arena.get(self.node);
    self.node = nd.link_at(0)?;
    self.len -= 1;
    nd.entry()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the entries of a [`SkipMap`](super::SkipMap), in order, with mutable values.
pub struct IterMut<'a, K, V> {
  /// One borrow per arena slot, taken out as the iterator passes the node.
  slots: Vec<Option<&'a mut Node<K, V>>>,
  node: NodeId,
  tail: NodeId,
  len: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
  #[inline]
  pub(super) fn new(arena: &'a mut Arena<K, V>, first: NodeId, tail: NodeId, len: usize) -> Self {
    Self {
      slots: arena.slots_mut(),
      node: first,
      tail,
      len,
    }
  }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
  type Item = (&'a K, &'a mut V);

  fn next(&mut self) -> Option<Self::Item> {
    if self.node == self.tail {
      return None;
    }

    let nd = self.slots.get_mut(self.node.index())?.take()?;
    self.node = nd.link_at(0)?;
    self.len -= 1;
    nd.entry_mut()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of a [`SkipMap`](super::SkipMap), in order.
pub struct IntoIter<K, V> {
  slots: Vec<Option<Node<K, V>>>,
  node: NodeId,
  tail: NodeId,
  len: usize,
}

impl<K, V> IntoIter<K, V> {
  #[inline]
  pub(super) const fn new(slots: Vec<Option<Node<K, V>>>, first: NodeId, tail: NodeId, len: usize) -> Self {
    Self {
      slots,
      node: first,
      tail,
      len,
    }
  }
}

impl<K, V> Iterator for IntoIter<K, V> {
  type Item = (K, V);

  fn next(&mut self) -> Option<Self::Item> {
    if self.node == self.tail {
      return None;
    }

    let nd = self.slots.get_mut(self.node.index())?.take()?;
    self.node = nd.link_at(0)?;
    self.len -= 1;
    nd.into_entry()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a [`SkipMap`](super::SkipMap), in order.
#[derive(Clone)]
pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Keys<'a, K, V> {
  #[inline]
  pub(super) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self(iter)
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(k, _)| k)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`SkipMap`](super::SkipMap), in key order.
#[derive(Clone)]
pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Values<'a, K, V> {
  #[inline]
  pub(super) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self(iter)
  }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An iterator over mutable references to the values of a [`SkipMap`](super::SkipMap).
pub struct ValuesMut<'a, K, V>(IterMut<'a, K, V>);

impl<'a, K, V> ValuesMut<'a, K, V> {
  #[inline]
  pub(super) const fn new(iter: IterMut<'a, K, V>) -> Self {
    Self(iter)
  }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
  type Item = &'a mut V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An iterator over a sub-range of the entries of a [`SkipMap`](super::SkipMap).
///
/// Created by [`SkipMap::range`](super::SkipMap::range).
pub struct Range<'a, K, V> {
  arena: &'a Arena<K, V>,
  node: NodeId,
  /// First node past the range, never yielded.
  end: NodeId,
}

impl<'a, K, V> Range<'a, K, V> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K, V>, start: NodeId, end: NodeId) -> Self {
    Self {
      arena,
      node: start,
      end,
    }
  }
}

impl<K, V> Clone for Range<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self { ..*self }
  }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    if self.node == self.end {
      return None;
    }

    let nd = self.arena.get(self.node);
    let entry = nd.entry()?;
    self.node = nd.link_at(0)?;
    Some(entry)
  }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}
