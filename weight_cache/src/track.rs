//! Recency / selection tracking, one variant per mode
//! 最近使用 / 选择跟踪，每种模式一个变体

use std::{borrow::Borrow, hash::Hash};

use crate::Mode;

mod lru;
mod rr;

use lru::Lru;
use rr::Rr;

/// Stored value with the weight computed at insertion
/// 存储的值及插入时计算的权重
pub(crate) struct Entry<V> {
  pub val: V,
  pub weight: usize,
}

pub(crate) enum Track<K, V> {
  Lru(Lru<K, V>),
  Rr(Rr<K, V>),
}

impl<K: Hash + Eq + Clone, V> Track<K, V> {
  pub fn new(mode: Mode, seed: Option<u64>) -> Self {
    match mode {
      Mode::Lru => Self::Lru(Lru::new()),
      Mode::Rr => Self::Rr(match seed {
        Some(seed) => Rr::with_seed(seed),
        None => Rr::new(),
      }),
    }
  }

  /// Lookup, promoting the key in LRU
  /// 查找，LRU 下提升该键
  #[inline]
  pub fn get<Q>(&mut self, key: &Q) -> Option<&Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    match self {
      Self::Lru(t) => t.get(key),
      Self::Rr(t) => t.get(key),
    }
  }

  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    match self {
      Self::Lru(t) => t.peek(key),
      Self::Rr(t) => t.get(key),
    }
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    match self {
      Self::Lru(t) => t.contains(key),
      Self::Rr(t) => t.contains(key),
    }
  }

  /// Insert or overwrite, returning the replaced entry
  /// 插入或覆盖，返回被替换的条目
  #[inline]
  pub fn insert(&mut self, key: K, entry: Entry<V>) -> Option<Entry<V>> {
    match self {
      Self::Lru(t) => t.insert(key, entry),
      Self::Rr(t) => t.insert(key, entry),
    }
  }

  /// Entry written by the last `insert`, if still resident.
  /// Only meaningful before any later lookup reorders entries.
  /// 最近一次 `insert` 写入的条目（若仍驻留）。
  /// 仅在后续查找重排条目之前有效。
  #[inline]
  pub fn newest(&self) -> Option<&Entry<V>> {
    match self {
      Self::Lru(t) => t.newest(),
      Self::Rr(t) => t.newest(),
    }
  }

  #[inline]
  pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    match self {
      Self::Lru(t) => t.remove(key),
      Self::Rr(t) => t.remove(key),
    }
  }

  /// Remove the entry the mode selects for eviction
  /// 移除按模式选中的淘汰条目
  #[inline]
  pub fn pop_victim(&mut self) -> Option<(K, Entry<V>)> {
    match self {
      Self::Lru(t) => t.pop_lru(),
      Self::Rr(t) => t.pop_random(),
    }
  }

  pub fn clear(&mut self) {
    match self {
      Self::Lru(t) => t.clear(),
      Self::Rr(t) => t.clear(),
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    match self {
      Self::Lru(t) => t.len(),
      Self::Rr(t) => t.len(),
    }
  }

  pub fn iter(&self) -> Iter<'_, K, V> {
    match self {
      Self::Lru(t) => Iter::Lru(t.iter()),
      Self::Rr(t) => Iter::Rr(t.iter()),
    }
  }
}

pub(crate) enum Iter<'a, K, V> {
  Lru(lru::Iter<'a, K, V>),
  Rr(rr::Iter<'a, K, V>),
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a Entry<V>);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    match self {
      Self::Lru(it) => it.next(),
      Self::Rr(it) => it.next(),
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    match self {
      Self::Lru(it) => it.size_hint(),
      Self::Rr(it) => it.size_hint(),
    }
  }
}
