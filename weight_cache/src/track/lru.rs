//! LRU tracking on hashlink::LruCache
//! 基于 hashlink::LruCache 的 LRU 跟踪
//!
//! Front of the list is least recently used, back is most recently used.
//! 链表头为最久未使用，尾为最近使用。

use std::{borrow::Borrow, hash::Hash};

use hashlink::LruCache;

use super::Entry;

pub(crate) type Iter<'a, K, V> = hashlink::linked_hash_map::Iter<'a, K, Entry<V>>;

/// Unbounded; capacity is enforced by weight in the owning cache
/// 不限条目数；容量由外层缓存按权重控制
pub(crate) struct Lru<K, V>(LruCache<K, Entry<V>>);

impl<K: Hash + Eq, V> Lru<K, V> {
  #[inline(always)]
  pub fn new() -> Self {
    Self(LruCache::new_unbounded())
  }

  #[inline(always)]
  pub fn get<Q>(&mut self, key: &Q) -> Option<&Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.get(key)
  }

  #[inline(always)]
  pub fn peek<Q>(&self, key: &Q) -> Option<&Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.peek(key)
  }

  #[inline(always)]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.contains_key(key)
  }

  /// Moves an existing key to the back
  /// 已存在的键会移到链表尾
  #[inline(always)]
  pub fn insert(&mut self, key: K, entry: Entry<V>) -> Option<Entry<V>> {
    self.0.insert(key, entry)
  }

  /// Back of the list, where the last insert lands
  /// 链表尾，即最近一次插入的位置
  ///
  /// Victims leave from the front, so the last insert is evicted only after
  /// every other entry.
  /// 淘汰从链表头开始，最近插入的条目最后才会被淘汰。
  #[inline(always)]
  pub fn newest(&self) -> Option<&Entry<V>> {
    self.0.iter().next_back().map(|(_, e)| e)
  }

  #[inline(always)]
  pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<V>>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.remove(key)
  }

  #[inline(always)]
  pub fn pop_lru(&mut self) -> Option<(K, Entry<V>)> {
    self.0.remove_lru()
  }

  #[inline(always)]
  pub fn clear(&mut self) {
    self.0.clear();
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, K, V> {
    self.0.iter()
  }
}
