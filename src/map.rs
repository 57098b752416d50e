use core::{
  fmt,
  mem,
  ops::{Bound, Index, RangeBounds},
};

use super::{
  arena::Arena,
  fixed::FixedVec,
  node::{Node, NodeId},
  Ascend, Comparator, Error, Geometric, LevelGenerator, Options, MAX_HEIGHT,
};

mod cursor;
pub use cursor::{Cursor, CursorMut};
pub(crate) use cursor::RawCursor;

mod iterator;
pub use iterator::{IntoIter, Iter, IterMut, Keys, Range, Values, ValuesMut};

#[cfg(test)]
mod tests;

/// The search fingers of a splice, one per level, ordered from the top level down to level `0`.
type Splice = FixedVec<RawCursor, MAX_HEIGHT>;

/// An ordered map based on a skiplist.
///
/// Entries are kept in the order defined by the comparator `C` (by default [`Ascend`],
/// the [`Ord`] order of the keys). Every node reaches a random level drawn from the
/// level generator `G` (by default [`Geometric`]), and the higher levels form express
/// lanes that let a search skip most of the list, so lookups, insertions and removals
/// take `O(log n)` expected time.
///
/// Keys are unique: inserting a key that is already present leaves the map untouched.
///
/// ## Example
///
/// ```
/// use skipmap::SkipMap;
///
/// let mut map = SkipMap::new();
/// map.insert(3, "c");
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get(&2), Some(&"b"));
/// assert_eq!(map.lower_bound(&2).key(), Some(&2));
/// assert_eq!(map.upper_bound(&2).key(), Some(&3));
/// assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct SkipMap<K, V, C = Ascend, G = Geometric> {
  arena: Arena<K, V>,
  /// Sentinel before the first entry, present at every level.
  head: NodeId,
  /// Sentinel after the last entry, present at every level.
  tail: NodeId,
  /// The highest level any entry participates in, `0` when the map is empty.
  height: usize,
  len: usize,
  opts: Options,
  cmp: C,
  generator: G,
}

impl<K: Ord, V> SkipMap<K, V> {
  /// Creates an empty map ordered by [`Ascend`], with the default [`Options`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let map = SkipMap::<u64, u64>::new();
  /// assert!(map.is_empty());
  /// assert_eq!(map.height(), 0);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Options::new().alloc()
  }
}

impl<K, V, C: Comparator<K>> SkipMap<K, V, C> {
  /// Creates an empty map ordered by the given comparator.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::{Descend, SkipMap};
  ///
  /// let mut map = SkipMap::with_comparator(Descend);
  /// map.insert(1, ());
  /// map.insert(2, ());
  /// assert_eq!(map.first(), Some((&2, &())));
  /// ```
  #[inline]
  pub fn with_comparator(cmp: C) -> Self {
    Self::new_in(Options::new(), cmp, Geometric::new())
  }
}

impl<K: Ord, V, G: LevelGenerator> SkipMap<K, V, Ascend, G> {
  /// Creates an empty map ordered by [`Ascend`] that draws node levels from `generator`.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::{Fixed, SkipMap};
  ///
  /// let mut map = SkipMap::with_level_generator(Fixed::new(2));
  /// map.insert("a", 1);
  /// assert_eq!(map.height(), 2);
  /// ```
  #[inline]
  pub fn with_level_generator(generator: G) -> Self {
    Self::new_in(Options::new(), Ascend, generator)
  }
}

impl<K, V, C, G> SkipMap<K, V, C, G> {
  pub(crate) fn new_in(opts: Options, cmp: C, generator: G) -> Self {
    let mut arena = Arena::with_capacity(opts.capacity().saturating_add(2));
    let head = arena.alloc(Node::sentinel());
    let tail = arena.alloc(Node::sentinel());
    arena.get_mut(head).set_link(0, tail);

    Self {
      arena,
      head,
      tail,
      height: 0,
      len: 0,
      opts,
      cmp,
      generator,
    }
  }

  /// Returns the number of entries in the map.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the map contains no entries.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the highest level any entry currently participates in.
  ///
  /// `0` for an empty map. It grows when a taller node is inserted and shrinks when the
  /// last node of the top level is removed.
  #[inline]
  pub const fn height(&self) -> usize {
    self.height
  }

  /// Returns the maximum number of levels a node of this map may participate in.
  #[inline]
  pub const fn max_height(&self) -> usize {
    self.opts.max_height()
  }

  /// Returns how many entries the map can hold before its arena reallocates.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.arena.capacity().saturating_sub(2)
  }

  /// Returns the options the map was created with.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator of the map.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Returns the level generator of the map.
  ///
  /// Replacing the generator only affects the nodes inserted afterwards.
  #[inline]
  pub fn level_generator_mut(&mut self) -> &mut G {
    &mut self.generator
  }

  /// Swaps the whole content of two maps, the comparators, the level generators
  /// and the current heights included.
  #[inline]
  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(self, other);
  }

  /// Returns a cursor at the first entry, or at the end if the map is empty.
  #[inline]
  pub fn cursor_front(&self) -> Cursor<'_, K, V, C, G> {
    Cursor::new(self, RawCursor::new(self.first_node(), 0))
  }

  /// Returns a mutable cursor at the first entry, or at the end if the map is empty.
  #[inline]
  pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, C, G> {
    let raw = RawCursor::new(self.first_node(), 0);
    CursorMut::new(self, raw)
  }

  /// Returns a cursor past the last entry.
  #[inline]
  pub fn cursor_end(&self) -> Cursor<'_, K, V, C, G> {
    Cursor::new(self, RawCursor::new(self.tail, 0))
  }

  /// Returns the first entry of the map.
  #[inline]
  pub fn first(&self) -> Option<(&K, &V)> {
    self.arena.get(self.first_node()).entry()
  }

  /// Returns the last entry of the map.
  ///
  /// The last entry is found by descending the express lanes, not by walking level `0`.
  pub fn last(&self) -> Option<(&K, &V)> {
    let mut cursor = RawCursor::new(self.head, self.height);
    loop {
      while let Some(next) = cursor.peek(&self.arena) {
        if next == self.tail {
          break;
        }
        cursor.advance(&self.arena);
      }

      if cursor.level() == 0 {
        break;
      }
      cursor.go_down();
    }

    self.arena.get(cursor.node()).entry()
  }

  /// Returns an iterator over the entries of the map, in order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(&self.arena, self.first_node(), self.tail, self.len)
  }

  /// Returns an iterator over the entries of the map, in order, with mutable values.
  #[inline]
  pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
    let (first, tail, len) = (self.first_node(), self.tail, self.len);
    IterMut::new(&mut self.arena, first, tail, len)
  }

  /// Returns an iterator over the keys of the map, in order.
  #[inline]
  pub fn keys(&self) -> Keys<'_, K, V> {
    Keys::new(self.iter())
  }

  /// Returns an iterator over the values of the map, in key order.
  #[inline]
  pub fn values(&self) -> Values<'_, K, V> {
    Values::new(self.iter())
  }

  /// Returns an iterator over mutable references to the values of the map, in key order.
  #[inline]
  pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
    ValuesMut::new(self.iter_mut())
  }

  #[inline]
  fn first_node(&self) -> NodeId {
    self.next_of(self.head, 0)
  }

  /// ## Panics
  /// - If `id` has no link at `level`, which means the list is corrupted.
  #[inline]
  fn next_of(&self, id: NodeId, level: usize) -> NodeId {
    match self.arena.get(id).link_at(level) {
      Some(next) => next,
      None => panic!("node {id} has no link at level {level}"),
    }
  }

  /// ## Panics
  /// - If `id` is a sentinel.
  #[inline]
  fn value_mut_of(&mut self, id: NodeId) -> &mut V {
    match self.arena.get_mut(id).entry_mut() {
      Some((_, value)) => value,
      None => panic!("sentinel node {id} holds no value"),
    }
  }
}

impl<K, V, C, G> SkipMap<K, V, C, G>
where
  C: Comparator<K>,
{
  /// Walks down from the top level of the head sentinel and records, at every level,
  /// the last node whose key precedes `key`.
  fn splice(&self, key: &K) -> Splice {
    let mut fingers = Splice::new();
    let mut cursor = RawCursor::new(self.head, self.height);

    loop {
      while let Some(next) = cursor.peek(&self.arena) {
        match self.arena.get(next).key() {
          Some(nk) if self.cmp.precedes(nk, key) => cursor.advance(&self.arena),
          _ => break,
        }
      }

      fingers.push(cursor);
      if cursor.level() == 0 {
        return fingers;
      }
      cursor.go_down();
    }
  }

  /// Returns the node right after the level `0` finger.
  #[inline]
  fn successor(&self, fingers: &Splice) -> NodeId {
    fingers
      .last()
      .map_or(self.tail, |finger| finger.advanced(&self.arena).node())
  }

  /// Returns `true` if `id` holds a key equivalent to `key`. Sentinels never match.
  #[inline]
  fn holds(&self, id: NodeId, key: &K) -> bool {
    self
      .arena
      .get(id)
      .key()
      .is_some_and(|k| self.cmp.equivalent(k, key))
  }

  #[inline]
  fn lower_bound_node(&self, key: &K) -> NodeId {
    self.successor(&self.splice(key))
  }

  #[inline]
  fn upper_bound_node(&self, key: &K) -> NodeId {
    let lb = self.lower_bound_node(key);
    if self.holds(lb, key) {
      self.next_of(lb, 0)
    } else {
      lb
    }
  }

  #[inline]
  fn find_node(&self, key: &K) -> Option<NodeId> {
    let lb = self.lower_bound_node(key);
    self.holds(lb, key).then_some(lb)
  }

  /// Unlinks `target` from every level it participates in and releases it.
  ///
  /// Returns the node that followed `target` together with the removed entry,
  /// or `None` if `target` is a sentinel.
  fn erase_in(&mut self, target: NodeId) -> Option<(NodeId, (K, V))> {
    if target == self.head || target == self.tail {
      return None;
    }

    let nd = self.arena.get(target);
    let level = nd.level();
    let fingers = self.splice(nd.key()?);

    for finger in fingers.iter() {
      let l = finger.level();
      if l > level {
        continue;
      }

      let prev = finger.node();
      if self.arena.get(prev).link_at(l) == Some(target) {
        let next = self.next_of(target, l);
        self.arena.get_mut(prev).set_link(l, next);
      }
    }

    let next = self.relocate_last(target, self.next_of(target, 0));
    let entry = self.arena.swap_remove(target).into_entry();
    self.len -= 1;
    debug_assert_eq!(self.arena.len(), self.len + 2, "arena and map disagree on the length");
    self.shrink();
    entry.map(|ent| (next, ent))
  }

  /// Repoints every link to the last node of the arena at `hole`, the slot
  /// [`Arena::swap_remove`] is about to move that node into. `hole` must already be
  /// unlinked. Returns `next` with the same renaming applied.
  fn relocate_last(&mut self, hole: NodeId, next: NodeId) -> NodeId {
    let last = match self.arena.last() {
      Some(last) if last != hole => last,
      _ => return next,
    };

    let nd = self.arena.get(last);
    let level = nd.level();
    let fingers = match nd.key() {
      Some(key) => self.splice(key),
      None => return next,
    };

    for finger in fingers.iter() {
      let l = finger.level();
      if l > level {
        continue;
      }

      let prev = finger.node();
      if self.arena.get(prev).link_at(l) == Some(last) {
        self.arena.get_mut(prev).set_link(l, hole);
      }
    }

    if next == last {
      hole
    } else {
      next
    }
  }

  /// Lowers the height while the top level only links the head to the tail.
  fn shrink(&mut self) {
    let old = self.height;
    while self.height > 0 && self.arena.get(self.head).link_at(self.height) == Some(self.tail) {
      self.height -= 1;
    }

    if self.height != old {
      #[cfg(feature = "tracing")]
      tracing::trace!(from = old, to = self.height, "skipmap height shrunk");
    }
  }

  /// Returns a cursor at the entry with the given key, or at the end if there is none.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// map.insert(1, "a");
  ///
  /// assert_eq!(map.find(&1).value(), Some(&"a"));
  /// assert!(map.find(&2).is_end());
  /// ```
  #[inline]
  pub fn find(&self, key: &K) -> Cursor<'_, K, V, C, G> {
    let nd = self.find_node(key).unwrap_or(self.tail);
    Cursor::new(self, RawCursor::new(nd, 0))
  }

  /// Returns a mutable cursor at the entry with the given key, or at the end if there is none.
  #[inline]
  pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V, C, G> {
    let nd = self.find_node(key).unwrap_or(self.tail);
    CursorMut::new(self, RawCursor::new(nd, 0))
  }

  /// Returns a cursor at the first entry whose key does not precede `key`,
  /// or at the end if there is none.
  #[inline]
  pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V, C, G> {
    Cursor::new(self, RawCursor::new(self.lower_bound_node(key), 0))
  }

  /// Mutable version of [`lower_bound`](SkipMap::lower_bound).
  #[inline]
  pub fn lower_bound_mut(&mut self, key: &K) -> CursorMut<'_, K, V, C, G> {
    let raw = RawCursor::new(self.lower_bound_node(key), 0);
    CursorMut::new(self, raw)
  }

  /// Returns a cursor at the first entry whose key is ordered strictly after `key`,
  /// or at the end if there is none.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// map.insert(1, ());
  /// map.insert(3, ());
  ///
  /// assert_eq!(map.upper_bound(&1).key(), Some(&3));
  /// assert_eq!(map.upper_bound(&2).key(), Some(&3));
  /// assert!(map.upper_bound(&3).is_end());
  /// ```
  #[inline]
  pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, V, C, G> {
    Cursor::new(self, RawCursor::new(self.upper_bound_node(key), 0))
  }

  /// Mutable version of [`upper_bound`](SkipMap::upper_bound).
  #[inline]
  pub fn upper_bound_mut(&mut self, key: &K) -> CursorMut<'_, K, V, C, G> {
    let raw = RawCursor::new(self.upper_bound_node(key), 0);
    CursorMut::new(self, raw)
  }

  /// Returns the pair `(lower_bound(key), upper_bound(key))`.
  ///
  /// The two cursors are equal when the map holds no entry with the given key.
  #[inline]
  pub fn equal_range(&self, key: &K) -> (Cursor<'_, K, V, C, G>, Cursor<'_, K, V, C, G>) {
    let lb = self.lower_bound_node(key);
    let ub = if self.holds(lb, key) {
      self.next_of(lb, 0)
    } else {
      lb
    };

    (
      Cursor::new(self, RawCursor::new(lb, 0)),
      Cursor::new(self, RawCursor::new(ub, 0)),
    )
  }

  /// Returns a reference to the value of the given key.
  #[inline]
  pub fn get(&self, key: &K) -> Option<&V> {
    self.get_key_value(key).map(|(_, v)| v)
  }

  /// Returns the stored key and the value of the given key.
  #[inline]
  pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
    self
      .find_node(key)
      .and_then(|nd| self.arena.get(nd).entry())
  }

  /// Returns a mutable reference to the value of the given key.
  #[inline]
  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    let nd = self.find_node(key)?;
    self.arena.get_mut(nd).entry_mut().map(|(_, v)| v)
  }

  /// Returns `true` if the map contains the given key.
  #[inline]
  pub fn contains_key(&self, key: &K) -> bool {
    self.find_node(key).is_some()
  }

  /// Returns the number of entries with the given key, which is either `0` or `1`.
  #[inline]
  pub fn count(&self, key: &K) -> usize {
    usize::from(self.contains_key(key))
  }

  /// Returns a reference to the value of the given key, or [`Error::KeyNotFound`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::{Error, SkipMap};
  ///
  /// let mut map = SkipMap::new();
  /// map.insert("a", 1);
  ///
  /// assert_eq!(map.at(&"a"), Ok(&1));
  /// assert_eq!(map.at(&"b"), Err(Error::KeyNotFound));
  /// ```
  #[inline]
  pub fn at(&self, key: &K) -> Result<&V, Error> {
    self.get(key).ok_or(Error::KeyNotFound)
  }

  /// Returns a mutable reference to the value of the given key, or [`Error::KeyNotFound`].
  #[inline]
  pub fn at_mut(&mut self, key: &K) -> Result<&mut V, Error> {
    self.get_mut(key).ok_or(Error::KeyNotFound)
  }

  /// Removes the entry with the given key and returns how many entries were removed,
  /// `0` or `1`.
  #[inline]
  pub fn erase(&mut self, key: &K) -> usize {
    match self.find_node(key) {
      Some(nd) => usize::from(self.erase_in(nd).is_some()),
      None => 0,
    }
  }

  /// Removes the entry with the given key and returns its value.
  #[inline]
  pub fn remove(&mut self, key: &K) -> Option<V> {
    self.remove_entry(key).map(|(_, v)| v)
  }

  /// Removes the entry with the given key and returns it.
  #[inline]
  pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
    let nd = self.find_node(key)?;
    self.erase_in(nd).map(|(_, ent)| ent)
  }

  /// Removes the first entry of the map and returns it.
  #[inline]
  pub fn pop_first(&mut self) -> Option<(K, V)> {
    let first = self.first_node();
    self.erase_in(first).map(|(_, ent)| ent)
  }

  /// Removes every entry. The map stays usable afterwards.
  ///
  /// Only the two sentinels survive, so the arena shrinks back to its empty size.
  pub fn clear(&mut self) {
    if self.is_empty() {
      return;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(len = self.len, height = self.height, "clearing skipmap");

    // The sentinels are the first two allocations.
    self.arena.truncate(2);
    let mut head = Node::sentinel();
    head.set_link(0, self.tail);
    *self.arena.get_mut(self.head) = head;
    self.len = 0;
    self.height = 0;
  }

  /// Returns an iterator over the entries whose keys lie within `range`, in order.
  ///
  /// The iterator is empty when the start of the range is ordered after its end.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// for i in 0..10 {
  ///   map.insert(i, i * 10);
  /// }
  ///
  /// assert_eq!(map.range(3..6).map(|(k, _)| *k).collect::<Vec<_>>(), [3, 4, 5]);
  /// assert_eq!(map.range(8..).count(), 2);
  /// assert_eq!(map.range(..=1).count(), 2);
  /// ```
  pub fn range<R>(&self, range: R) -> Range<'_, K, V>
  where
    R: RangeBounds<K>,
  {
    let start = match range.start_bound() {
      Bound::Included(k) => self.lower_bound_node(k),
      Bound::Excluded(k) => self.upper_bound_node(k),
      Bound::Unbounded => self.first_node(),
    };
    let end = match range.end_bound() {
      Bound::Included(k) => self.upper_bound_node(k),
      Bound::Excluded(k) => self.lower_bound_node(k),
      Bound::Unbounded => self.tail,
    };

    let empty = match (self.arena.get(start).key(), self.arena.get(end).key()) {
      (Some(s), Some(e)) => !self.cmp.precedes(s, e),
      (Some(_), None) => false,
      (None, _) => true,
    };

    if empty {
      Range::new(&self.arena, self.tail, self.tail)
    } else {
      Range::new(&self.arena, start, end)
    }
  }
}

impl<K, V, C, G> SkipMap<K, V, C, G>
where
  C: Comparator<K>,
  G: LevelGenerator,
{
  fn random_level(&mut self) -> usize {
    self
      .generator
      .next_level()
      .min(self.opts.max_height() - 1)
  }

  /// Links a new node for `key` unless the key is already present.
  ///
  /// Returns the node holding the key and whether it was newly inserted.
  fn insert_in(&mut self, key: K, value: V) -> (NodeId, bool) {
    let fingers = self.splice(&key);
    let candidate = self.successor(&fingers);
    if self.holds(candidate, &key) {
      return (candidate, false);
    }

    let level = self.random_level();
    let list_height = self.height;
    if level > list_height {
      let tail = self.tail;
      let head = self.arena.get_mut(self.head);
      for l in (list_height + 1)..=level {
        head.set_link(l, tail);
      }
      self.height = level;

      #[cfg(feature = "tracing")]
      tracing::trace!(from = list_height, to = level, "skipmap height grown");
    }

    let nd = self.arena.alloc(Node::new(key, value, level));
    for l in 0..=level {
      // Levels above the old height have no finger, their predecessor is the head.
      let prev = if l > list_height {
        self.head
      } else {
        let finger = fingers[list_height - l];
        debug_assert_eq!(finger.level(), l, "splice finger at the wrong level");
        finger.node()
      };

      let next = self.next_of(prev, l);
      self.arena.get_mut(nd).set_link(l, next);
      self.arena.get_mut(prev).set_link(l, nd);
    }

    self.len += 1;
    debug_assert_eq!(self.arena.len(), self.len + 2, "arena and map disagree on the length");
    (nd, true)
  }

  /// Inserts an entry unless the key is already present.
  ///
  /// Returns a cursor at the entry holding the key, and `true` if the entry was inserted.
  /// When the key is already present the map is left untouched and the given value is dropped.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = SkipMap::new();
  /// assert!(map.insert(5, "a").1);
  ///
  /// let (cursor, inserted) = map.insert(5, "b");
  /// assert!(!inserted);
  /// assert_eq!(cursor.value(), Some(&"a"));
  /// ```
  #[inline]
  pub fn insert(&mut self, key: K, value: V) -> (CursorMut<'_, K, V, C, G>, bool) {
    let (nd, inserted) = self.insert_in(key, value);
    (CursorMut::new(self, RawCursor::new(nd, 0)), inserted)
  }

  /// Returns a mutable reference to the value of the given key, inserting
  /// `V::default()` first if the key is absent.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::SkipMap;
  ///
  /// let mut map = SkipMap::<&str, u32>::new();
  /// *map.get_or_insert_default("a") += 1;
  /// *map.get_or_insert_default("a") += 1;
  /// assert_eq!(map.get(&"a"), Some(&2));
  /// ```
  pub fn get_or_insert_default(&mut self, key: K) -> &mut V
  where
    V: Default,
  {
    let nd = match self.find_node(&key) {
      Some(nd) => nd,
      None => self.insert_in(key, V::default()).0,
    };
    self.value_mut_of(nd)
  }

  /// Inserting a sequence of entries in one call is not supported, this always returns
  /// [`Error::NotSupported`] and leaves the map untouched.
  #[inline]
  pub fn insert_range<I>(&mut self, _entries: I) -> Result<(), Error>
  where
    I: IntoIterator<Item = (K, V)>,
  {
    Err(Error::NotSupported("range insertion"))
  }

  /// Inserting with a position hint is not supported, this always returns
  /// [`Error::NotSupported`] and leaves the map untouched.
  #[inline]
  pub fn insert_hinted(&mut self, _hint: &K, _key: K, _value: V) -> Result<bool, Error> {
    Err(Error::NotSupported("hinted insertion"))
  }
}

impl<K: Ord, V> Default for SkipMap<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Cloning re-inserts every entry into a fresh map, so the clone draws its own levels
/// and does not share the layout of the map it was cloned from.
impl<K, V, C, G> Clone for SkipMap<K, V, C, G>
where
  K: Clone,
  V: Clone,
  C: Comparator<K> + Clone,
  G: LevelGenerator + Clone,
{
  fn clone(&self) -> Self {
    let mut map = Self::new_in(self.opts, self.cmp.clone(), self.generator.clone());
    for (k, v) in self.iter() {
      map.insert_in(k.clone(), v.clone());
    }
    map
  }
}

impl<K, V, C, G> fmt::Debug for SkipMap<K, V, C, G>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K, V, C, G> PartialEq for SkipMap<K, V, C, G>
where
  K: PartialEq,
  V: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<K: Eq, V: Eq, C, G> Eq for SkipMap<K, V, C, G> {}

impl<K, V, C, G> Index<&K> for SkipMap<K, V, C, G>
where
  C: Comparator<K>,
{
  type Output = V;

  /// ## Panics
  /// - If the key is not present in the map.
  #[inline]
  fn index(&self, key: &K) -> &V {
    match self.get(key) {
      Some(value) => value,
      None => panic!("no entry found for key"),
    }
  }
}

impl<K, V, C, G> Extend<(K, V)> for SkipMap<K, V, C, G>
where
  C: Comparator<K>,
  G: LevelGenerator,
{
  /// Inserts every entry in turn. Entries whose key is already present are dropped.
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    for (k, v) in iter {
      self.insert_in(k, v);
    }
  }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut map = Self::new();
    map.extend(iter);
    map
  }
}

impl<K, V, C, G> IntoIterator for SkipMap<K, V, C, G> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    let first = self.first_node();
    IntoIter::new(self.arena.into_slots(), first, self.tail, self.len)
  }
}

impl<'a, K, V, C, G> IntoIterator for &'a SkipMap<K, V, C, G> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, K, V, C, G> IntoIterator for &'a mut SkipMap<K, V, C, G> {
  type Item = (&'a K, &'a mut V);
  type IntoIter = IterMut<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}
