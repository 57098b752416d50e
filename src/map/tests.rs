#![allow(dead_code)]

use core::ops::Bound;
use std::{collections::BTreeMap, format, string::String, vec, vec::Vec};

use crate::{tests::*, Descend, Fixed, MAX_HEIGHT};

use super::*;

type Map<G> = SkipMap<usize, String, Ascend, G>;

/// Walks every level of the list and checks ordering, tower heights and bookkeeping.
fn check_invariants<K, V, C, G>(l: &SkipMap<K, V, C, G>)
where
  C: Comparator<K>,
{
  let mut towers = Vec::new();
  for level in 0..=l.height {
    let lane = RawCursor::new(l.head, level);
    let mut cursor = lane;
    let mut prev: Option<&K> = None;
    let mut count = 0;

    loop {
      let next = cursor
        .peek(&l.arena)
        .expect("every level must end at the tail");
      if next == l.tail {
        break;
      }

      let nd = l.arena.get(next);
      assert!(
        nd.level() >= lane.level(),
        "node {next} is linked above its tower"
      );
      let key = nd.key().expect("only the sentinels hold no key");
      if let Some(prev) = prev {
        assert!(
          l.cmp.precedes(prev, key),
          "keys out of order at level {}",
          lane.level()
        );
      }
      if lane.level() == 0 {
        towers.push(nd.level());
      }

      prev = Some(key);
      count += 1;
      cursor.advance(&l.arena);
    }

    let expected = towers.iter().filter(|&&top| top >= lane.level()).count();
    assert_eq!(count, expected, "wrong node count at level {}", lane.level());
  }

  assert_eq!(towers.len(), l.len());
  assert_eq!(towers.iter().copied().max().unwrap_or(0), l.height());
  assert_eq!(l.arena.len(), l.len() + 2);

  let head = l.arena.get(l.head);
  for level in l.height + 1..=head.level() {
    assert_eq!(head.link_at(level), Some(l.tail));
  }
}

fn keys_of<'a>(iter: impl Iterator<Item = (&'a usize, &'a String)>) -> Vec<usize> {
  iter.map(|(k, _)| *k).collect()
}

pub(crate) fn empty<G: LevelGenerator + Clone>(mut l: Map<G>) {
  assert!(l.is_empty());
  assert_eq!(l.len(), 0);
  assert_eq!(l.height(), 0);
  assert_eq!(l.cursor_front(), l.cursor_end());

  assert!(l.find(&1).is_end());
  assert!(l.lower_bound(&1).is_end());
  assert!(l.upper_bound(&1).is_end());
  let (lb, ub) = l.equal_range(&1);
  assert_eq!(lb, ub);

  assert!(l.first().is_none());
  assert!(l.last().is_none());
  assert!(l.get(&1).is_none());
  assert!(!l.contains_key(&1));
  assert_eq!(l.count(&1), 0);
  assert_eq!(l.at(&1), Err(Error::KeyNotFound));
  assert_eq!(l.iter().count(), 0);
  assert_eq!(l.range(..).count(), 0);

  assert_eq!(l.erase(&1), 0);
  assert!(l.pop_first().is_none());
  assert!(l.cursor_front_mut().remove_current().is_none());

  l.clear();
  assert!(l.is_empty());
  check_invariants(&l);
}

pub(crate) fn basic<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in [1, 3, 2] {
    let (cursor, inserted) = l.insert(i, new_value(i));
    assert!(inserted);
    assert_eq!(cursor.key(), Some(&i));
    assert_eq!(cursor.value(), Some(&new_value(i)));
  }

  check_invariants(&l);
  assert_eq!(l.len(), 3);
  assert_eq!(l.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);

  for i in 1..=3 {
    assert_eq!(l.lower_bound(&i).entry(), Some((&i, &new_value(i))));
    assert_eq!(l.get(&i), Some(&new_value(i)));
    assert_eq!(l[&i], new_value(i));
  }

  assert_eq!(l.first(), Some((&1, &new_value(1))));
  assert_eq!(l.last(), Some((&3, &new_value(3))));

  let mut cursor = l.cursor_front();
  for i in 1..=3 {
    assert_eq!(cursor.key(), Some(&i));
    cursor.move_next();
  }
  assert!(cursor.is_end());
  cursor.move_next();
  assert!(cursor.is_end());
  assert_eq!(cursor, l.cursor_end());
}

pub(crate) fn duplicate<G: LevelGenerator + Clone>(mut l: Map<G>) {
  assert!(l.insert(5, String::from("a")).1);

  let (cursor, inserted) = l.insert(5, String::from("b"));
  assert!(!inserted);
  assert_eq!(cursor.value().map(String::as_str), Some("a"));

  assert_eq!(l.len(), 1);
  assert_eq!(l.count(&5), 1);
  check_invariants(&l);
}

pub(crate) fn mixed<G: LevelGenerator + Clone>(mut l: Map<G>) {
  let mut reference = BTreeMap::new();
  for (k, v) in mixed_data() {
    let fresh = !reference.contains_key(&k);
    reference.entry(k).or_insert_with(|| v.clone());
    assert_eq!(l.insert(k, v).1, fresh);
    check_invariants(&l);
  }

  assert_eq!(l.len(), 7);
  assert_eq!(l.len(), reference.len());
  assert!(l.iter().eq(reference.iter()));

  for k in 0..=7 {
    assert_eq!(l.get(&k), reference.get(&k));
    assert_eq!(l.find(&k).is_end(), !reference.contains_key(&k));
    assert_eq!(
      l.lower_bound(&k).key(),
      reference.range(k..).next().map(|(k, _)| k)
    );
    assert_eq!(
      l.upper_bound(&k).key(),
      reference
        .range((Bound::Excluded(k), Bound::Unbounded))
        .next()
        .map(|(k, _)| k)
    );
  }

  // The first insertion of a key wins.
  assert_eq!(l.get(&2), Some(&new_value(2)));
}

pub(crate) fn bounds<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for k in [5, 1, 3] {
    l.insert(k, new_value(k));
  }
  check_invariants(&l);

  for (key, lower) in [(0, Some(1)), (1, Some(1)), (2, Some(3)), (3, Some(3)), (5, Some(5)), (6, None)] {
    assert_eq!(l.lower_bound(&key).key().copied(), lower, "lower bound of {key}");
  }

  for (key, upper) in [(0, Some(1)), (1, Some(3)), (2, Some(3)), (3, Some(5)), (4, Some(5)), (5, None)] {
    assert_eq!(l.upper_bound(&key).key().copied(), upper, "upper bound of {key}");
  }

  assert_eq!(l.lower_bound(&6), l.cursor_end());
  assert_eq!(l.upper_bound(&5), l.cursor_end());
}

pub(crate) fn equal_range<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for k in [5, 1, 3] {
    l.insert(k, new_value(k));
  }

  let (lb, ub) = l.equal_range(&3);
  assert_eq!(lb.key(), Some(&3));
  assert_eq!(ub.key(), Some(&5));
  let mut cursor = lb;
  cursor.move_next();
  assert_eq!(cursor, ub);

  let (lb, ub) = l.equal_range(&4);
  assert_eq!(lb, ub);
  assert_eq!(lb.key(), Some(&5));

  let (lb, ub) = l.equal_range(&9);
  assert!(lb.is_end());
  assert!(ub.is_end());
}

pub(crate) fn erase<G: LevelGenerator + Clone>(mut l: Map<G>) {
  let mut reference = BTreeMap::new();
  for (k, v) in mixed_data() {
    reference.entry(k).or_insert_with(|| v.clone());
    l.insert(k, v);
  }

  for k in [6, 0, 3, 3, 9, 2, 5, 4, 1] {
    let removed = usize::from(reference.remove(&k).is_some());
    assert_eq!(l.erase(&k), removed, "erasing {k}");
    check_invariants(&l);
    assert!(l.iter().eq(reference.iter()));
  }

  assert!(l.is_empty());
  assert_eq!(l.height(), 0);
}

pub(crate) fn erase_at_cursor<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in 0..10 {
    l.insert(i, new_value(i));
  }

  let mut cursor = l.cursor_front_mut();
  while !cursor.is_end() {
    if cursor.key().is_some_and(|k| k % 2 == 0) {
      let (k, v) = cursor.remove_current().unwrap();
      assert_eq!(v, new_value(k));
    } else {
      cursor.move_next();
    }
  }
  assert!(cursor.remove_current().is_none());
  assert!(cursor.is_end());

  check_invariants(&l);
  assert_eq!(l.keys().copied().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);

  let mut cursor = l.find_mut(&9);
  assert_eq!(cursor.remove_current(), Some((9, new_value(9))));
  assert!(cursor.is_end());
  assert_eq!(l.len(), 4);
  check_invariants(&l);
}

pub(crate) fn clear<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in 0..100 {
    l.insert(i, new_value(i));
  }

  l.clear();
  assert!(l.is_empty());
  assert_eq!(l.height(), 0);
  assert_eq!(l.arena.len(), 2);
  assert_eq!(l.cursor_front(), l.cursor_end());
  check_invariants(&l);

  l.insert(7, new_value(7));
  assert_eq!(l.len(), 1);
  assert_eq!(l.get(&7), Some(&new_value(7)));
  check_invariants(&l);
}

pub(crate) fn access<G: LevelGenerator + Clone>(mut l: Map<G>) {
  assert_eq!(l.at(&1), Err(Error::KeyNotFound));

  assert!(l.get_or_insert_default(1).is_empty());
  assert_eq!(l.len(), 1);
  l.get_or_insert_default(1).push_str("one");
  assert_eq!(l.len(), 1);
  assert_eq!(l.at(&1).map(String::as_str), Ok("one"));

  l.at_mut(&1).unwrap().push('!');
  assert_eq!(l[&1], "one!");

  *l.get_mut(&1).unwrap() = new_value(1);
  assert_eq!(l.get_key_value(&1), Some((&1, &new_value(1))));

  assert_eq!(l.at_mut(&2), Err(Error::KeyNotFound));
  assert!(l.get_mut(&2).is_none());

  l.find_mut(&1).into_value_mut().unwrap().clear();
  assert_eq!(l[&1], "");

  let mut cursor = l.find_mut(&1);
  cursor.value_mut().unwrap().push('x');
  assert_eq!(cursor.value().map(String::as_str), Some("x"));
  check_invariants(&l);
}

pub(crate) fn clone_is_deep<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for (k, v) in mixed_data() {
    l.insert(k, v);
  }

  let mut copy = l.clone();
  check_invariants(&copy);
  assert_eq!(copy, l);
  assert_eq!(copy.max_height(), l.max_height());

  copy.insert(10, new_value(10));
  copy.erase(&5);
  *copy.get_mut(&4).unwrap() = String::from("changed");
  assert_ne!(copy, l);

  assert_eq!(l.len(), 7);
  assert!(l.contains_key(&5));
  assert!(!l.contains_key(&10));
  assert_eq!(l.get(&4), Some(&new_value(1)));
  check_invariants(&l);
}

pub(crate) fn move_and_swap<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in 0..20 {
    l.insert(i, new_value(i));
  }
  let height = l.height();

  let mut moved = l;
  assert_eq!(moved.len(), 20);
  assert_eq!(moved.height(), height);
  check_invariants(&moved);

  let mut other = moved.clone();
  other.clear();
  other.insert(100, new_value(100));
  let other_height = other.height();

  moved.swap(&mut other);
  assert_eq!(moved.len(), 1);
  assert_eq!(moved.height(), other_height);
  assert_eq!(moved.get(&100), Some(&new_value(100)));
  assert_eq!(other.len(), 20);
  assert_eq!(other.height(), height);
  assert!(other.keys().copied().eq(0..20));

  check_invariants(&moved);
  check_invariants(&other);
}

pub(crate) fn large<G: LevelGenerator + Clone>(mut l: Map<G>) {
  const N: usize = 1000;

  // 7919 is prime, so this visits every key of 0..N once.
  for i in 0..N {
    let k = (i * 7919) % N;
    assert!(l.insert(k, new_value(k)).1);
  }
  check_invariants(&l);
  assert_eq!(l.len(), N);
  assert!(l.keys().copied().eq(0..N));

  for k in (0..N).step_by(2) {
    assert_eq!(l.remove(&k), Some(new_value(k)));
  }
  check_invariants(&l);
  assert_eq!(l.len(), N / 2);

  for k in 0..N {
    assert_eq!(l.contains_key(&k), k % 2 == 1);
  }
}

pub(crate) fn range<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in (0..20).step_by(2) {
    l.insert(i, new_value(i));
  }

  assert_eq!(keys_of(l.range(3..9)), [4, 6, 8]);
  assert_eq!(keys_of(l.range(4..=8)), [4, 6, 8]);
  assert_eq!(keys_of(l.range(4..=4)), [4]);
  assert_eq!(keys_of(l.range(..4)), [0, 2]);
  assert_eq!(keys_of(l.range(16..)), [16, 18]);
  assert_eq!(
    keys_of(l.range((Bound::Excluded(4), Bound::Included(10)))),
    [6, 8, 10]
  );
  assert_eq!(l.range(..).count(), 10);

  assert_eq!(l.range(9..3).count(), 0);
  assert_eq!(l.range(4..4).count(), 0);
  assert_eq!(l.range(5..6).count(), 0);
  assert_eq!(l.range(100..).count(), 0);
  assert_eq!(l.range(..0).count(), 0);
}

pub(crate) fn iterators<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in 0..10 {
    l.insert(i, new_value(i));
  }

  assert_eq!(l.iter().len(), 10);
  let mut iter = l.iter();
  iter.next();
  assert_eq!(iter.len(), 9);

  for v in l.values_mut() {
    v.push('!');
  }
  for (k, v) in l.iter_mut() {
    assert_eq!(*v, format!("{}!", new_value(*k)));
    v.pop();
  }
  for (k, v) in &mut l {
    assert_eq!(*v, new_value(*k));
  }

  let expected = (0..10).map(new_value).collect::<Vec<_>>();
  assert!(l.values().eq(expected.iter()));
  assert!((&l).into_iter().map(|(k, _)| *k).eq(0..10));

  let owned = l.into_iter().collect::<Vec<_>>();
  assert_eq!(owned, (0..10).map(|i| (i, new_value(i))).collect::<Vec<_>>());
}

pub(crate) fn first_last_pop<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for k in [5, 1, 9, 3] {
    l.insert(k, new_value(k));
  }

  assert_eq!(l.first(), Some((&1, &new_value(1))));
  assert_eq!(l.last(), Some((&9, &new_value(9))));

  assert_eq!(l.pop_first(), Some((1, new_value(1))));
  assert_eq!(l.first().map(|(k, _)| *k), Some(3));
  assert_eq!(l.len(), 3);
  check_invariants(&l);

  assert_eq!(l.erase(&9), 1);
  assert_eq!(l.last().map(|(k, _)| *k), Some(5));

  let mut popped = vec![];
  while let Some((k, _)) = l.pop_first() {
    popped.push(k);
  }
  assert_eq!(popped, [3, 5]);
  assert_eq!(l.height(), 0);
  check_invariants(&l);
}

pub(crate) fn shrink_keeps_arena_dense<G: LevelGenerator + Clone>(mut l: Map<G>) {
  for i in 0..1000 {
    l.insert(i, new_value(i));
  }
  assert_eq!(l.arena.len(), 1002);

  // Interleave removals from both ends and the middle, so moved nodes sit everywhere.
  for i in (0..500).rev() {
    assert_eq!(l.erase(&(i * 2 + 1)), 1);
  }
  check_invariants(&l);
  for i in 1..500 {
    assert_eq!(l.erase(&(i * 2)), 1);
    assert_eq!(l.arena.len(), l.len() + 2);
  }

  assert_eq!(l.len(), 1);
  assert_eq!(l.arena.len(), l.len() + 2);
  check_invariants(&l);

  for _ in 0..10 {
    *l.values_mut().next().unwrap() += "!";
  }
  assert_eq!(l[&0], format!("{}!!!!!!!!!!", new_value(0)));
  assert_eq!(l.iter_mut().len(), 1);

  l.insert(3, new_value(3));
  l.insert(1, new_value(1));
  assert_eq!(keys_of(l.iter()), [0, 1, 3]);
  check_invariants(&l);
}

crate::__unit_tests!(|TEST_OPTIONS| {
  empty,
  basic,
  duplicate,
  mixed,
  bounds,
  equal_range,
  erase,
  erase_at_cursor,
  clear,
  access,
  clone_is_deep,
  move_and_swap,
  large,
  range,
  iterators,
  first_last_pop,
  shrink_keeps_arena_dense,
});

#[test]
fn test_erase_flat_layout() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, Fixed::new(0));
  for (k, v) in mixed_data() {
    l.insert(k, v);
  }
  assert_eq!(l.height(), 0);

  for k in 0..7 {
    assert_eq!(l.erase(&k), 1);
    assert_eq!(l.len(), 6 - k);
    check_invariants(&l);
  }
  assert!(l.is_empty());
}

#[test]
fn test_height_follows_tallest_node() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, Fixed::new(3));
  l.insert(1, new_value(1));
  assert_eq!(l.height(), 3);

  *l.level_generator_mut() = Fixed::new(1);
  l.insert(2, new_value(2));
  assert_eq!(l.height(), 3);

  l.erase(&1);
  assert_eq!(l.height(), 1);
  assert_eq!(l.arena.get(l.head).link_at(3), Some(l.tail));
  check_invariants(&l);

  l.erase(&2);
  assert_eq!(l.height(), 0);
  assert_eq!(l.arena.get(l.head).link_at(1), Some(l.tail));
  check_invariants(&l);
}

#[test]
fn test_staircase_towers() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, staircase());
  for i in 0..4 {
    l.insert(i, new_value(i));
  }
  assert_eq!(l.height(), 3);

  let mut cursor = RawCursor::new(l.head, 0);
  for i in 0..4 {
    cursor.advance(&l.arena);
    let nd = l.arena.get(cursor.node());
    assert_eq!(nd.key(), Some(&i));
    assert_eq!(nd.level(), i);
  }

  // Level 2 skips straight from the head to key 2.
  let lane = RawCursor::new(l.head, 2).advanced(&l.arena);
  assert_eq!(l.arena.get(lane.node()).key(), Some(&2));
  let lane = lane.advanced(&l.arena);
  assert_eq!(l.arena.get(lane.node()).key(), Some(&3));
  assert_eq!(lane.advanced(&l.arena).node(), l.tail);

  check_invariants(&l);
}

#[test]
fn test_max_height_clamps_levels() {
  let mut l = Options::new()
    .with_max_height(1)
    .alloc_with::<u32, (), _, _>(Ascend, Fixed::new(MAX_HEIGHT));
  for i in 0..10 {
    l.insert(i, ());
  }
  assert_eq!(l.height(), 0);
  check_invariants(&l);

  let mut l = TEST_OPTIONS.alloc_with::<u32, (), _, _>(Ascend, Fixed::new(MAX_HEIGHT));
  l.insert(1, ());
  assert_eq!(l.height(), TEST_OPTIONS.max_height() - 1);
}

#[test]
fn test_capacity() {
  let l = TEST_CAPACITY_OPTIONS.alloc::<u32, u32>();
  assert!(l.capacity() >= 1024);
  assert_eq!(l.options().capacity(), 1024);
}

#[test]
fn test_descend() {
  let mut l = SkipMap::with_comparator(Descend);
  for k in MIXED_KEYS {
    l.insert(k, ());
  }
  check_invariants(&l);

  assert_eq!(l.keys().copied().collect::<Vec<_>>(), [6, 5, 4, 3, 2, 1, 0]);
  assert_eq!(l.lower_bound(&3).key(), Some(&3));
  assert_eq!(l.upper_bound(&3).key(), Some(&2));
  assert_eq!(l.first(), Some((&6, &())));
  assert_eq!(l.last(), Some((&0, &())));
}

#[test]
fn test_closure_comparator() {
  let mut l = SkipMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
  assert!(l.insert("ccc", 1).1);
  assert!(l.insert("a", 2).1);
  assert!(l.insert("bb", 3).1);
  assert!(!l.insert("zz", 4).1);
  check_invariants(&l);

  assert_eq!(l.keys().copied().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
  assert_eq!(l.get(&"xx"), Some(&3));
}

#[test]
fn test_equality() {
  let mut a = SkipMap::new();
  let mut b = SkipMap::new();
  assert_eq!(a, b);

  a.insert(1, "a");
  assert_ne!(a, b);
  b.insert(1, "a");
  assert_eq!(a, b);

  b.insert(1, "b");
  assert_eq!(a, b);

  *b.get_mut(&1).unwrap() = "b";
  assert_ne!(a, b);

  b.insert(2, "b");
  a.insert(2, "b");
  *a.get_mut(&1).unwrap() = "b";
  assert_eq!(a, b);
}

#[test]
fn test_cursor_conversion() {
  let mut l = (0..5u32).map(|i| (i, i)).collect::<SkipMap<_, _>>();
  let other = l.clone();
  assert_ne!(l.find(&1), other.find(&1));
  assert_eq!(l.find(&1), l.lower_bound(&1));
  assert_ne!(l.find(&1), l.upper_bound(&1));

  {
    let cursor = l.find_mut(&2);
    assert_eq!(cursor.as_cursor().key(), Some(&2));
    assert_eq!(cursor.peek_next(), Some((&3, &3)));

    let mut cursor: Cursor<'_, u32, u32> = cursor.into();
    assert_eq!(cursor.entry(), Some((&2, &2)));
    assert_eq!(cursor.peek_next(), Some((&3, &3)));
    cursor.advance_by(2);
    assert_eq!(cursor.key(), Some(&4));
    assert_eq!(cursor.peek_next(), None);
    cursor.move_next();
    assert!(cursor.is_end());
  }

  let mut cursor = l.lower_bound_mut(&3);
  cursor.advance_by(1);
  *cursor.value_mut().unwrap() = 40;
  assert_eq!(l.get(&4), Some(&40));

  let mut cursor = l.upper_bound_mut(&0);
  assert_eq!(cursor.key(), Some(&1));
  cursor.move_next();
  assert_eq!(cursor.entry(), Some((&2, &2)));
}

#[test]
fn test_raw_cursor_stops_at_tail() {
  let mut l = TEST_OPTIONS.alloc_with::<u32, u32, _, _>(Ascend, Fixed::new(0));
  for i in 0..3 {
    l.insert(i, i);
  }

  let mut raw = RawCursor::new(l.head, 0);
  raw.advance_by(&l.arena, 10);
  assert_eq!(raw.node(), l.tail);
  raw.advance(&l.arena);
  assert_eq!(raw.node(), l.tail);
  assert!(raw.peek(&l.arena).is_none());

  assert_eq!(RawCursor::new(l.tail, 0), RawCursor::new(l.tail, 3));
}

#[test]
#[should_panic(expected = "already at level 0")]
fn test_raw_cursor_below_level_zero() {
  let mut raw = RawCursor::default();
  raw.go_down();
}

#[test]
fn test_sentinel_erase_is_noop() {
  let mut l = SkipMap::<u32, u32>::new();
  l.insert(1, 1);

  assert!(l.erase_in(l.head).is_none());
  assert!(l.erase_in(l.tail).is_none());
  assert_eq!(l.len(), 1);

  let mut cursor = l.find_mut(&9);
  assert!(cursor.is_end());
  assert!(cursor.remove_current().is_none());
  assert!(cursor.is_end());
  assert_eq!(l.len(), 1);
  check_invariants(&l);
}

#[test]
fn test_not_supported() {
  let mut l = SkipMap::<u32, u32>::new();
  assert_eq!(
    l.insert_range([(1, 1), (2, 2)]),
    Err(Error::NotSupported("range insertion"))
  );
  assert_eq!(
    l.insert_hinted(&1, 1, 1),
    Err(Error::NotSupported("hinted insertion"))
  );
  assert!(l.is_empty());
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn test_index_missing_key() {
  let l = SkipMap::<u32, u32>::new();
  let _ = l[&1];
}

#[test]
fn test_take_and_collect() {
  let mut l = [(2, "b"), (1, "a"), (2, "c")]
    .into_iter()
    .collect::<SkipMap<_, _>>();
  assert_eq!(l.len(), 2);
  assert_eq!(l.get(&2), Some(&"b"));

  let taken = core::mem::take(&mut l);
  assert!(l.is_empty());
  assert_eq!(taken.len(), 2);

  l.extend(taken);
  assert_eq!(l.keys().copied().collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn test_debug() {
  let mut l = SkipMap::<u32, &str>::new();
  l.insert(2, "b");
  l.insert(1, "a");

  assert_eq!(format!("{l:?}"), r#"{1: "a", 2: "b"}"#);
  assert_eq!(format!("{:?}", l.find(&1)), r#"Cursor { entry: Some((1, "a")) }"#);
  assert_eq!(format!("{:?}", l.cursor_end()), "Cursor { entry: None }");
}

#[test]
fn test_remove_current_follows_moved_successor() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, Fixed::new(1));
  l.insert(0, new_value(0));
  l.insert(2, new_value(2));
  // Allocated last, so it moves into the slot of the removed node.
  l.insert(1, new_value(1));

  let mut cursor = l.find_mut(&0);
  assert_eq!(cursor.remove_current(), Some((0, new_value(0))));
  assert_eq!(cursor.key(), Some(&1));
  assert_eq!(cursor.remove_current(), Some((1, new_value(1))));
  assert_eq!(cursor.key(), Some(&2));

  assert_eq!(keys_of(l.iter()), [2]);
  assert_eq!(l.arena.len(), 3);
  check_invariants(&l);
}

#[test]
fn test_into_iter_after_erase() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, Geometric::with_seed(3));
  for i in 0..64 {
    l.insert(i, new_value(i));
  }
  for i in (0..64).step_by(3) {
    l.erase(&i);
  }

  let expected = (0..64).filter(|i| i % 3 != 0).collect::<Vec<_>>();
  let owned = l.into_iter().map(|(k, _)| k).collect::<Vec<_>>();
  assert_eq!(owned, expected);
}

#[test]
fn test_geometric_never_draws_level_zero() {
  let mut l = TEST_OPTIONS.alloc_with::<usize, String, _, _>(Ascend, Geometric::with_seed(11));
  for i in 0..256 {
    l.insert(i, new_value(i));
  }
  assert!(l.height() >= 1);

  let mut lane0 = RawCursor::new(l.head, 0);
  let mut lane1 = RawCursor::new(l.head, 1);
  loop {
    lane0.advance(&l.arena);
    lane1.advance(&l.arena);
    assert_eq!(lane0.node(), lane1.node());
    if lane0.node() == l.tail {
      break;
    }
    assert!(l.arena.get(lane0.node()).level() >= 1);
  }
  check_invariants(&l);
}
