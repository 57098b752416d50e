use core::fmt;

use super::{
  super::{
    arena::Arena,
    node::NodeId,
    Ascend, Comparator, Geometric,
  },
  SkipMap,
};

/// A position in the list: a node plus the level the position moves along.
///
/// Two raw cursors are equal when they point at the same node, whatever their level.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RawCursor {
  node: NodeId,
  level: usize,
}

impl PartialEq for RawCursor {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.node == other.node
  }
}

impl Eq for RawCursor {}

impl RawCursor {
  #[inline]
  pub(crate) const fn new(node: NodeId, level: usize) -> Self {
    Self { node, level }
  }

  #[inline]
  pub(crate) const fn node(&self) -> NodeId {
    self.node
  }

  #[inline]
  pub(crate) const fn level(&self) -> usize {
    self.level
  }

  /// Returns the node this cursor would move to, or `None` at the tail.
  #[inline]
  pub(crate) fn peek<K, V>(&self, arena: &Arena<K, V>) -> Option<NodeId> {
    arena.get(self.node).link_at(self.level)
  }

  /// Moves to the next node at the current level. Stays put when there is no next node.
  #[inline]
  pub(crate) fn advance<K, V>(&mut self, arena: &Arena<K, V>) {
    if let Some(next) = self.peek(arena) {
      self.node = next;
    }
  }

  /// Advances `n` times, stopping early at the tail.
  pub(crate) fn advance_by<K, V>(&mut self, arena: &Arena<K, V>, n: usize) {
    for _ in 0..n {
      match self.peek(arena) {
        Some(next) => self.node = next,
        None => return,
      }
    }
  }

  #[inline]
  pub(crate) fn advanced<K, V>(mut self, arena: &Arena<K, V>) -> Self {
    self.advance(arena);
    self
  }

  /// ## Panics
  /// - If the cursor is already at level `0`.
  #[inline]
  pub(crate) fn go_down(&mut self) {
    assert!(self.level > 0, "cursor is already at level 0");
    self.level -= 1;
  }
}

/// A read-only position in a [`SkipMap`].
///
/// A cursor either points at an entry or at the end, past the last entry.
/// Moving past the end is a no-op.
pub struct Cursor<'a, K, V, C = Ascend, G = Geometric> {
  map: &'a SkipMap<K, V, C, G>,
  raw: RawCursor,
}

impl<K, V, C, G> Clone for Cursor<'_, K, V, C, G> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K, V, C, G> Copy for Cursor<'_, K, V, C, G> {}

impl<'a, K, V, C, G> Cursor<'a, K, V, C, G> {
  #[inline]
  pub(super) const fn new(map: &'a SkipMap<K, V, C, G>, raw: RawCursor) -> Self {
    Self { map, raw }
  }

  /// Returns `true` if the cursor is past the last entry.
  #[inline]
  pub fn is_end(&self) -> bool {
    self.raw.node() == self.map.tail
  }

  /// Returns the key at the cursor, `None` at the end.
  #[inline]
  pub fn key(&self) -> Option<&'a K> {
    self.map.arena.get(self.raw.node()).key()
  }

  /// Returns the value at the cursor, `None` at the end.
  #[inline]
  pub fn value(&self) -> Option<&'a V> {
    self.entry().map(|(_, v)| v)
  }

  /// Returns the entry at the cursor, `None` at the end.
  #[inline]
  pub fn entry(&self) -> Option<(&'a K, &'a V)> {
    self.map.arena.get(self.raw.node()).entry()
  }

  /// Returns the entry after the cursor without moving it.
  #[inline]
  pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
    let arena = &self.map.arena;
    self.raw.peek(arena).and_then(|nd| arena.get(nd).entry())
  }

  /// Moves to the next entry.
  #[inline]
  pub fn move_next(&mut self) {
    self.raw.advance(&self.map.arena);
  }

  /// Moves `n` entries forward, stopping at the end.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let map = (0..5).map(|i| (i, ())).collect::<SkipMap<_, _>>();
  /// let mut cursor = map.cursor_front();
  ///
  /// cursor.advance_by(3);
  /// assert_eq!(cursor.key(), Some(&3));
  /// cursor.advance_by(10);
  /// assert!(cursor.is_end());
  /// ```
  #[inline]
  pub fn advance_by(&mut self, n: usize) {
    self.raw.advance_by(&self.map.arena, n);
  }
}

impl<K, V, C, G> PartialEq for Cursor<'_, K, V, C, G> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    core::ptr::eq(self.map, other.map) && self.raw == other.raw
  }
}

impl<K, V, C, G> Eq for Cursor<'_, K, V, C, G> {}

impl<K: fmt::Debug, V: fmt::Debug, C, G> fmt::Debug for Cursor<'_, K, V, C, G> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Cursor")
      .field("entry", &self.entry())
      .finish()
  }
}

/// A position in a [`SkipMap`] with mutable access to values, and the ability to
/// remove the entry it points at.
pub struct CursorMut<'a, K, V, C = Ascend, G = Geometric> {
  map: &'a mut SkipMap<K, V, C, G>,
  raw: RawCursor,
}

impl<'a, K, V, C, G> CursorMut<'a, K, V, C, G> {
  #[inline]
  pub(super) fn new(map: &'a mut SkipMap<K, V, C, G>, raw: RawCursor) -> Self {
    Self { map, raw }
  }

  /// Returns `true` if the cursor is past the last entry.
  #[inline]
  pub fn is_end(&self) -> bool {
    self.raw.node() == self.map.tail
  }

  /// Returns the key at the cursor, `None` at the end.
  #[inline]
  pub fn key(&self) -> Option<&K> {
    self.map.arena.get(self.raw.node()).key()
  }

  /// Returns the value at the cursor, `None` at the end.
  #[inline]
  pub fn value(&self) -> Option<&V> {
    self.entry().map(|(_, v)| v)
  }

  /// Returns the entry at the cursor, `None` at the end.
  #[inline]
  pub fn entry(&self) -> Option<(&K, &V)> {
    self.map.arena.get(self.raw.node()).entry()
  }

  /// Returns a mutable reference to the value at the cursor, `None` at the end.
  #[inline]
  pub fn value_mut(&mut self) -> Option<&mut V> {
    self
      .map
      .arena
      .get_mut(self.raw.node())
      .entry_mut()
      .map(|(_, v)| v)
  }

  /// Converts the cursor into a mutable reference to the value it points at,
  /// bound to the lifetime of the map borrow.
  #[inline]
  pub fn into_value_mut(self) -> Option<&'a mut V> {
    let Self { map, raw } = self;
    map.arena.get_mut(raw.node()).entry_mut().map(|(_, v)| v)
  }

  /// Returns the entry after the cursor without moving it.
  #[inline]
  pub fn peek_next(&self) -> Option<(&K, &V)> {
    let arena = &self.map.arena;
    self.raw.peek(arena).and_then(|nd| arena.get(nd).entry())
  }

  /// Moves to the next entry.
  #[inline]
  pub fn move_next(&mut self) {
    self.raw.advance(&self.map.arena);
  }

  /// Moves `n` entries forward, stopping at the end.
  #[inline]
  pub fn advance_by(&mut self, n: usize) {
    self.raw.advance_by(&self.map.arena, n);
  }

  /// Returns a read-only cursor at the same position, borrowing this one.
  #[inline]
  pub fn as_cursor(&self) -> Cursor<'_, K, V, C, G> {
    Cursor::new(&*self.map, self.raw)
  }
}

impl<K, V, C, G> CursorMut<'_, K, V, C, G>
where
  C: Comparator<K>,
{
  /// Removes the entry at the cursor and moves the cursor to the entry that followed it.
  ///
  /// Returns the removed entry, or `None` when the cursor is at the end, in which
  /// case nothing happens.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = (0..4).map(|i| (i, i * 10)).collect::<SkipMap<_, _>>();
  /// let mut cursor = map.find_mut(&1);
  ///
  /// assert_eq!(cursor.remove_current(), Some((1, 10)));
  /// assert_eq!(cursor.key(), Some(&2));
  /// assert_eq!(map.len(), 3);
  /// ```
  pub fn remove_current(&mut self) -> Option<(K, V)> {
    match self.map.erase_in(self.raw.node()) {
      Some((next, entry)) => {
        self.raw = RawCursor::new(next, 0);
        Some(entry)
      }
      None => {
        self.raw = RawCursor::new(self.map.tail, 0);
        None
      }
    }
  }
}

impl<'a, K, V, C, G> From<CursorMut<'a, K, V, C, G>> for Cursor<'a, K, V, C, G> {
  #[inline]
  fn from(cursor: CursorMut<'a, K, V, C, G>) -> Self {
    Cursor::new(cursor.map, cursor.raw)
  }
}

impl<K: fmt::Debug, V: fmt::Debug, C, G> fmt::Debug for CursorMut<'_, K, V, C, G> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CursorMut")
      .field("entry", &self.entry())
      .finish()
  }
}
