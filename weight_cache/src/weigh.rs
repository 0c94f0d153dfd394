//! Weight functions
//! 权重函数
//!
//! A weight is computed once when a value is stored and stays fixed until the
//! key is stored again.
//! 权重在存入时计算一次，直到该键再次存入前保持不变。

use std::{
  borrow::Cow,
  collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
  rc::Rc,
  sync::Arc,
};

/// Structural size of a value
/// 值的结构大小
///
/// Byte length for strings, element count for collections, 1 for scalars.
/// 字符串为字节长度，集合为元素数，标量为 1。
pub trait Weight {
  fn weight(&self) -> usize;
}

/// Per-cache weight function
/// 每个缓存的权重函数
pub trait Weigh<V: ?Sized> {
  fn weigh(&self, val: &V) -> usize;
}

/// Weigh by [`Weight`], the default
/// 按 [`Weight`] 计重，默认
#[derive(Debug, Clone, Copy, Default)]
pub struct Len;

impl<V: Weight + ?Sized> Weigh<V> for Len {
  #[inline(always)]
  fn weigh(&self, val: &V) -> usize {
    val.weight()
  }
}

/// Every entry weighs 1, the cap becomes an entry count
/// 每个条目权重为 1，上限即条目数
#[derive(Debug, Clone, Copy, Default)]
pub struct One;

impl<V: ?Sized> Weigh<V> for One {
  #[inline(always)]
  fn weigh(&self, _: &V) -> usize {
    1
  }
}

impl<V: ?Sized, F: Fn(&V) -> usize> Weigh<V> for F {
  #[inline(always)]
  fn weigh(&self, val: &V) -> usize {
    self(val)
  }
}

macro_rules! unit_weight {
  ($($t:ty),*) => {
    $(
      impl Weight for $t {
        #[inline(always)]
        fn weight(&self) -> usize {
          1
        }
      }
    )*
  };
}

unit_weight!(
  bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl Weight for str {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl Weight for String {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<T> Weight for [T] {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<T, const N: usize> Weight for [T; N] {
  #[inline(always)]
  fn weight(&self) -> usize {
    N
  }
}

impl<T> Weight for Vec<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<T> Weight for VecDeque<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<K, V, S> Weight for HashMap<K, V, S> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<T, S> Weight for HashSet<T, S> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<K, V> Weight for BTreeMap<K, V> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

impl<T> Weight for BTreeSet<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.len()
  }
}

// None is free
// None 不计重
impl<T: Weight> Weight for Option<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    self.as_ref().map_or(0, Weight::weight)
  }
}

impl<T: Weight + ?Sized> Weight for &T {
  #[inline(always)]
  fn weight(&self) -> usize {
    (**self).weight()
  }
}

impl<T: Weight + ?Sized> Weight for Box<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    (**self).weight()
  }
}

impl<T: Weight + ?Sized> Weight for Rc<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    (**self).weight()
  }
}

impl<T: Weight + ?Sized> Weight for Arc<T> {
  #[inline(always)]
  fn weight(&self) -> usize {
    (**self).weight()
  }
}

impl<T> Weight for Cow<'_, T>
where
  T: Weight + ToOwned + ?Sized,
{
  #[inline(always)]
  fn weight(&self) -> usize {
    (**self).weight()
  }
}
