use std::vec::Vec;

/// Index of a node in the [`Arena`](crate::arena::Arena).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
  #[inline]
  pub(crate) const fn new(idx: usize) -> Self {
    Self(idx)
  }

  #[inline]
  pub(crate) const fn index(&self) -> usize {
    self.0
  }
}

impl core::fmt::Display for NodeId {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// A tower in the skiplist.
///
/// The node only stores data, the traversal logic lives in the cursor and the map.
/// `links[0]` is the plain "next" pointer of a linked list, `links[i]` is the next
/// node that also reaches level `i`.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
  /// `None` for the head and tail sentinels.
  entry: Option<(K, V)>,
  links: Vec<Option<NodeId>>,
}

impl<K, V> Node<K, V> {
  /// Creates a sentinel node, which holds no entry and no links yet.
  #[inline]
  pub(crate) const fn sentinel() -> Self {
    Self {
      entry: None,
      links: Vec::new(),
    }
  }

  /// Creates a node participating in levels `0..=level`, with every link unset.
  #[inline]
  pub(crate) fn new(key: K, value: V, level: usize) -> Self {
    let mut links = Vec::with_capacity(level + 1);
    links.resize(level + 1, None);
    Self {
      entry: Some((key, value)),
      links,
    }
  }

  /// Returns the highest level this node participates in.
  #[inline]
  pub(crate) fn level(&self) -> usize {
    self.links.len().saturating_sub(1)
  }

  /// Returns the next node at `level`, or `None` when this node has no link at that level.
  #[inline]
  pub(crate) fn link_at(&self, level: usize) -> Option<NodeId> {
    self.links.get(level).copied().flatten()
  }

  /// Points the link at `level` to `target`, growing the tower if needed.
  /// The tower never shrinks.
  #[inline]
  pub(crate) fn set_link(&mut self, level: usize, target: NodeId) {
    if self.links.len() <= level {
      self.links.resize(level + 1, None);
    }
    self.links[level] = Some(target);
  }

  #[inline]
  pub(crate) fn key(&self) -> Option<&K> {
    self.entry.as_ref().map(|(k, _)| k)
  }

  #[inline]
  pub(crate) fn entry(&self) -> Option<(&K, &V)> {
    self.entry.as_ref().map(|(k, v)| (k, v))
  }

  #[inline]
  pub(crate) fn entry_mut(&mut self) -> Option<(&K, &mut V)> {
    self.entry.as_mut().map(|(k, v)| (&*k, v))
  }

  #[inline]
  pub(crate) fn into_entry(self) -> Option<(K, V)> {
    self.entry
  }
}
