use crate::{Ascend, Comparator, Geometric, LevelGenerator, SkipMap, MAX_HEIGHT};

/// The default number of levels of a [`SkipMap`].
const DEFAULT_MAX_HEIGHT: usize = 20;

/// Options for [`SkipMap`].
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_height: usize,
  capacity: usize,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_height: DEFAULT_MAX_HEIGHT,
      capacity: 0,
    }
  }

  /// Sets the maximum height, that is the number of levels a node may participate in.
  /// Levels produced by the [`LevelGenerator`] are clamped to `max_height - 1`.
  ///
  /// Default is `20`. The maximum height is [`MAX_HEIGHT`]. The minimum height is `1`,
  /// which degrades the skipmap into a sorted linked list.
  ///
  /// ## Panics
  ///
  /// Panics if `height` is `0` or larger than [`MAX_HEIGHT`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::Options;
  ///
  /// let options = Options::new().with_max_height(12);
  /// assert_eq!(options.max_height(), 12);
  /// ```
  #[inline]
  pub const fn with_max_height(mut self, height: usize) -> Self {
    assert!(
      height >= 1 && height <= MAX_HEIGHT,
      "max height must be in range 1..=MAX_HEIGHT"
    );
    self.max_height = height;
    self
  }

  /// Sets how many nodes the arena reserves room for up front.
  ///
  /// Default is `0`, the arena grows on demand.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::Options;
  ///
  /// let options = Options::new().with_capacity(1024);
  /// assert_eq!(options.capacity(), 1024);
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Returns the maximum height.
  #[inline]
  pub const fn max_height(&self) -> usize {
    self.max_height
  }

  /// Returns the number of nodes reserved up front.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Creates a [`SkipMap`] ordered by [`Ascend`] with a [`Geometric`] level generator.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::Options;
  ///
  /// let mut map = Options::new().with_max_height(8).alloc::<u32, &str>();
  /// map.insert(1, "one");
  /// assert_eq!(map.max_height(), 8);
  /// ```
  #[inline]
  pub fn alloc<K, V>(self) -> SkipMap<K, V>
  where
    K: Ord,
  {
    SkipMap::new_in(self, Ascend, Geometric::new())
  }

  /// Creates a [`SkipMap`] with the given comparator and level generator.
  ///
  /// ## Example
  ///
  /// ```
  /// use skipmap::{Descend, Fixed, Options};
  ///
  /// let mut map = Options::new().alloc_with::<u32, &str, _, _>(Descend, Fixed::new(0));
  /// map.insert(1, "one");
  /// map.insert(2, "two");
  /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
  /// ```
  #[inline]
  pub fn alloc_with<K, V, C, G>(self, cmp: C, generator: G) -> SkipMap<K, V, C, G>
  where
    C: Comparator<K>,
    G: LevelGenerator,
  {
    SkipMap::new_in(self, cmp, generator)
  }
}
