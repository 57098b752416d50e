use core::ops::{Deref, DerefMut};

/// A vector with a capacity fixed at compile time, stored inline.
///
/// The skipmap uses it to collect one search finger per level while walking
/// down the express lanes, so a search never touches the heap.
///
/// ## Example
///
/// ```rust
/// use skipmap::FixedVec;
///
/// let mut v = FixedVec::<u8, 2>::new();
/// v.push(1);
/// assert_eq!(v.try_push(2), Ok(()));
/// assert_eq!(v.try_push(3), Err(3));
/// assert!(v.is_full());
/// assert_eq!(v.as_slice(), &[1, 2]);
/// ```
#[derive(Clone, Copy)]
pub struct FixedVec<T, const N: usize> {
  data: [T; N],
  len: usize,
}

impl<T: Copy + Default, const N: usize> Default for FixedVec<T, N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Copy + Default, const N: usize> FixedVec<T, N> {
  /// Creates an empty vector.
  #[inline]
  pub fn new() -> Self {
    const { assert!(N > 0, "FixedVec cannot have a zero capacity") };
    Self {
      data: [T::default(); N],
      len: 0,
    }
  }

  /// Appends an element to the back of the vector.
  ///
  /// ## Panics
  ///
  /// Panics if the vector is already full.
  #[inline]
  pub fn push(&mut self, value: T) {
    if self.try_push(value).is_err() {
      panic!("FixedVec is full (capacity {N})");
    }
  }

  /// Appends an element to the back of the vector, giving it back if the vector is full.
  #[inline]
  pub fn try_push(&mut self, value: T) -> Result<(), T> {
    if self.is_full() {
      return Err(value);
    }

    self.data[self.len] = value;
    self.len += 1;
    Ok(())
  }

  /// Removes the last element and returns it, or `None` if the vector is empty.
  #[inline]
  pub fn pop(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }

    self.len -= 1;
    Some(self.data[self.len])
  }
}

impl<T, const N: usize> FixedVec<T, N> {
  /// Returns the number of elements in the vector.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the vector contains no elements.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns `true` if no more elements can be pushed.
  #[inline]
  pub const fn is_full(&self) -> bool {
    self.len == N
  }

  /// Returns the number of elements the vector can hold.
  #[inline]
  pub const fn capacity(&self) -> usize {
    N
  }

  /// Shortens the vector to `len` elements. Has no effect if `len` is not
  /// smaller than the current length.
  #[inline]
  pub fn truncate(&mut self, len: usize) {
    self.len = self.len.min(len);
  }

  /// Removes all elements.
  #[inline]
  pub fn clear(&mut self) {
    self.len = 0;
  }

  /// Returns the initialized part of the vector as a slice.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data[..self.len]
  }

  /// Returns the initialized part of the vector as a mutable slice.
  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data[..self.len]
  }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &Self::Target {
    self.as_slice()
  }
}

impl<T, const N: usize> DerefMut for FixedVec<T, N> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.as_mut_slice()
  }
}

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for FixedVec<T, N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}
