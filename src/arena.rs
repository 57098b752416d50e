use std::vec::Vec;

use super::node::{Node, NodeId};

/// Slab of nodes owned by a single [`SkipMap`](crate::SkipMap).
///
/// Links between nodes are [`NodeId`]s into this arena, so a node never owns
/// another node. The slab stays dense: removing a node moves the last node into
/// the freed slot, and the caller repoints the links to the moved node.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
  slots: Vec<Node<K, V>>,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) fn with_capacity(cap: usize) -> Self {
    Self {
      slots: Vec::with_capacity(cap),
    }
  }

  /// Returns the number of live nodes, sentinels included.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.slots.len()
  }

  /// Returns the number of slots the arena can hold without reallocating.
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Returns the id of the node that the next [`swap_remove`](Self::swap_remove) moves.
  #[inline]
  pub(crate) fn last(&self) -> Option<NodeId> {
    self.slots.len().checked_sub(1).map(NodeId::new)
  }

  pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
    self.slots.push(node);
    NodeId::new(self.slots.len() - 1)
  }

  /// Removes the node at `id` and moves the last node into its slot.
  ///
  /// Every link that pointed at [`last`](Self::last) must be repointed at `id`
  /// by the caller.
  ///
  /// ## Panics
  /// - If `id` does not refer to a live node.
  pub(crate) fn swap_remove(&mut self, id: NodeId) -> Node<K, V> {
    if id.index() >= self.slots.len() {
      panic!("node {id} is not allocated by this arena");
    }
    self.slots.swap_remove(id.index())
  }

  /// Drops every node from index `len` on.
  #[inline]
  pub(crate) fn truncate(&mut self, len: usize) {
    self.slots.truncate(len);
  }

  /// ## Panics
  /// - If `id` does not refer to a live node.
  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
    match self.slots.get(id.index()) {
      Some(node) => node,
      None => panic!("node {id} is not allocated by this arena"),
    }
  }

  /// ## Panics
  /// - If `id` does not refer to a live node.
  #[inline]
  pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
    match self.slots.get_mut(id.index()) {
      Some(node) => node,
      None => panic!("node {id} is not allocated by this arena"),
    }
  }

  /// Returns one mutable borrow per live node, indexed by [`NodeId::index`], so that
  /// distinct nodes can be handed out mutably at the same time.
  #[inline]
  pub(crate) fn slots_mut(&mut self) -> Vec<Option<&mut Node<K, V>>> {
    self.slots.iter_mut().map(Some).collect()
  }

  /// Consumes the arena, keeping every node at its index.
  #[inline]
  pub(crate) fn into_slots(self) -> Vec<Option<Node<K, V>>> {
    self.slots.into_iter().map(Some).collect()
  }
}
