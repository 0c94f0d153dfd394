//! Random replacement tracking
//! 随机替换跟踪
//!
//! Entries live in a dense slot vector so a victim is one random index away.
//! Removal swaps the last slot into the hole and patches its index.
//! 条目存放于紧凑的槽向量，随机下标即可选出淘汰者。
//! 删除时将末尾槽换入空位并修正其索引。

use std::{borrow::Borrow, hash::Hash, slice};

use fastrand::Rng;
use hashbrown::HashMap;

use super::Entry;

struct Slot<K, V> {
  key: K,
  entry: Entry<V>,
}

pub(crate) struct Rr<K, V> {
  slots: Vec<Slot<K, V>>,
  index: HashMap<K, usize>,
  // Slot of the last inserted key, followed through swaps
  // 最近插入键所在的槽，随交换更新
  newest: Option<usize>,
  rng: Rng,
}

impl<K: Hash + Eq + Clone, V> Rr<K, V> {
  #[inline]
  pub fn new() -> Self {
    Self::with_rng(Rng::new())
  }

  #[inline]
  pub fn with_seed(seed: u64) -> Self {
    Self::with_rng(Rng::with_seed(seed))
  }

  fn with_rng(rng: Rng) -> Self {
    Self {
      slots: Vec::new(),
      index: HashMap::new(),
      newest: None,
      rng,
    }
  }

  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<&Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    self.slots.get(idx).map(|s| &s.entry)
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.index.contains_key(key)
  }

  pub fn insert(&mut self, key: K, entry: Entry<V>) -> Option<Entry<V>> {
    if let Some(&idx) = self.index.get(&key) {
      self.newest = Some(idx);
      return Some(std::mem::replace(&mut self.slots[idx].entry, entry));
    }
    let idx = self.slots.len();
    self.index.insert(key.clone(), idx);
    self.slots.push(Slot { key, entry });
    self.newest = Some(idx);
    None
  }

  /// Entry of the last insert, `None` once it is gone
  /// 最近一次插入的条目，被移除后为 `None`
  #[inline]
  pub fn newest(&self) -> Option<&Entry<V>> {
    self.slots.get(self.newest?).map(|s| &s.entry)
  }

  pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.remove(key)?;
    Some(self.take(idx).entry)
  }

  /// Remove a uniformly random entry
  /// 均匀随机移除一个条目
  pub fn pop_random(&mut self) -> Option<(K, Entry<V>)> {
    let n = self.slots.len();
    if n == 0 {
      return None;
    }
    let idx = self.rng.usize(0..n);
    let slot = self.take(idx);
    self.index.remove(&slot.key);
    Some((slot.key, slot.entry))
  }

  // Caller keeps `index` in sync for the taken key
  // 调用方负责同步被取出键的索引
  fn take(&mut self, idx: usize) -> Slot<K, V> {
    let last = self.slots.len() - 1;
    let slot = self.slots.swap_remove(idx);
    if self.newest == Some(idx) {
      self.newest = None;
    } else if self.newest == Some(last) {
      self.newest = Some(idx);
    }
    if let Some(moved) = self.slots.get(idx) {
      if let Some(i) = self.index.get_mut(&moved.key) {
        *i = idx;
      }
    }
    slot
  }

  pub fn clear(&mut self) {
    self.slots.clear();
    self.index.clear();
    self.newest = None;
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.slots.len()
  }

  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter(self.slots.iter())
  }
}

pub(crate) struct Iter<'a, K, V>(slice::Iter<'a, Slot<K, V>>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a Entry<V>);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|s| (&s.key, &s.entry))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}
