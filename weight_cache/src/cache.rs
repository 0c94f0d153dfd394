//! Weight-bounded cache
//! 按权重限容的缓存

use std::{borrow::Borrow, hash::Hash};

use crate::{
  Cache, Conf, Config, Len, Mode, Result, Weigh,
  track::{self, Entry, Track},
};

/// Associative cache capped by the sum of value weights
/// 以值权重之和限容的关联缓存
///
/// # Examples
/// ```
/// use weight_cache::WeightCache;
///
/// let mut cache: WeightCache<&str, String> = WeightCache::lru(Some(3));
/// cache.store("k1", "1".into());
/// cache.store("k2", "2".into());
/// cache.store("k3", "3".into());
///
/// // Promote k1, k2 becomes least recently used
/// cache.fetch("k1");
/// cache.store("k4", "4".into());
///
/// assert!(cache.contains("k1"));
/// assert!(!cache.contains("k2"));
/// assert_eq!(cache.weight(), 3);
/// ```
#[must_use]
pub struct WeightCache<K, V, W = Len> {
  track: Track<K, V>,
  mode: Mode,
  max: Option<usize>,
  // Sum of weights, wide enough that any number of usize weights cannot wrap
  // 权重之和，位宽足以容纳任意个 usize 权重而不回绕
  total: u128,
  weigh: W,
}

impl<K: Hash + Eq + Clone, V> WeightCache<K, V> {
  /// Create with optional max weight and mode
  /// 创建，指定可选最大权重与模式
  #[inline]
  pub fn new(max_weight: Option<usize>, mode: Mode) -> Self {
    Self::with_weigh(max_weight, mode, Len)
  }

  #[inline]
  pub fn lru(max_weight: Option<usize>) -> Self {
    Self::new(max_weight, Mode::Lru)
  }

  #[inline]
  pub fn rr(max_weight: Option<usize>) -> Self {
    Self::new(max_weight, Mode::Rr)
  }

  /// Create from configuration options
  /// 由配置选项创建
  pub fn with_conf(conf: &[Conf]) -> Result<Self> {
    Self::with_conf_weigh(conf, Len)
  }
}

impl<K: Hash + Eq + Clone, V> Default for WeightCache<K, V> {
  fn default() -> Self {
    Self::lru(None)
  }
}

impl<K: Hash + Eq + Clone, V, W> WeightCache<K, V, W> {
  /// Create with a custom weight function
  /// 使用自定义权重函数创建
  pub fn with_weigh(max_weight: Option<usize>, mode: Mode, weigh: W) -> Self {
    Self::build(
      Config {
        max_weight,
        mode,
        seed: None,
      },
      weigh,
    )
  }

  pub fn with_conf_weigh(conf: &[Conf], weigh: W) -> Result<Self> {
    Ok(Self::build(Config::try_from(conf)?, weigh))
  }

  fn build(config: Config, weigh: W) -> Self {
    Self {
      track: Track::new(config.mode, config.seed),
      mode: config.mode,
      max: config.max_weight,
      total: 0,
      weigh,
    }
  }

  /// Get value, promoting the key in LRU mode
  /// 获取值，LRU 模式下提升该键
  #[inline]
  pub fn fetch<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.track.get(key).map(|e| &e.val)
  }

  /// Get value without touching recency
  /// 获取值，不影响最近使用顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.track.peek(key).map(|e| &e.val)
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.track.contains(key)
  }

  /// Remove by key, never evicts others
  /// 按键删除，不会淘汰其他条目
  pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let entry = self.track.remove(key)?;
    self.total -= entry.weight as u128;
    Some(entry.val)
  }

  pub fn clear(&mut self) {
    self.track.clear();
    self.total = 0;
  }

  /// Entry count
  /// 条目数
  #[inline]
  pub fn len(&self) -> usize {
    self.track.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  #[inline]
  pub fn any(&self) -> bool {
    !self.is_empty()
  }

  /// Sum of entry weights, saturating at `usize::MAX`
  /// 条目权重之和，超过 `usize::MAX` 时饱和
  #[inline]
  pub fn weight(&self) -> usize {
    saturate(self.total)
  }

  /// Sum of entry weights, recomputed from scratch
  /// 从头重新计算的条目权重之和
  pub fn recount(&self) -> usize {
    saturate(self.track.iter().map(|(_, e)| e.weight as u128).sum())
  }

  #[inline]
  pub fn max_weight(&self) -> Option<usize> {
    self.max
  }

  /// Change the cap, pruning at once if the new cap is exceeded
  /// 修改上限，若超出新上限则立即淘汰
  pub fn set_max_weight(&mut self, max_weight: Option<usize>) {
    if self.max != max_weight {
      log::debug!("{} cache cap {:?} -> {:?}", self.mode, self.max, max_weight);
    }
    self.max = max_weight;
    self.prune();
  }

  #[inline]
  pub fn uncap(&mut self) {
    self.set_max_weight(None);
  }

  #[inline]
  pub fn is_capped(&self) -> bool {
    self.max.is_some()
  }

  #[inline]
  pub fn is_uncapped(&self) -> bool {
    self.max.is_none()
  }

  #[inline]
  pub fn mode(&self) -> Mode {
    self.mode
  }

  #[inline]
  pub fn is_lru(&self) -> bool {
    self.mode == Mode::Lru
  }

  #[inline]
  pub fn is_rr(&self) -> bool {
    self.mode == Mode::Rr
  }

  /// Resident entries; LRU yields least to most recently used
  /// 驻留条目；LRU 按最久到最近使用的顺序产出
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter(self.track.iter())
  }

  // Evict until back under the cap. Terminates: every round drops one entry.
  // 淘汰直到回到上限内。每轮移除一个条目，必然终止。
  fn prune(&mut self) {
    let Some(max) = self.max else {
      return;
    };
    let max = max as u128;
    let mut n = 0usize;
    let mut freed = 0u128;
    while self.total > max {
      let Some((_, entry)) = self.track.pop_victim() else {
        break;
      };
      self.total -= entry.weight as u128;
      freed += entry.weight as u128;
      n += 1;
    }
    if n > 0 {
      log::trace!("{} cache evicted {n} entries, freed weight {freed}", self.mode);
    }
  }
}

impl<K: Hash + Eq + Clone, V, W: Weigh<V>> WeightCache<K, V, W> {
  /// Insert or overwrite, then prune
  /// 插入或覆盖，然后淘汰
  ///
  /// Returns `None` when the value itself was pruned by this call.
  /// 若值本身在此次调用中被淘汰则返回 `None`。
  pub fn store(&mut self, key: K, val: V) -> Option<&V> {
    let weight = self.weigh.weigh(&val);
    if let Some(old) = self.track.insert(key, Entry { val, weight }) {
      self.total -= old.weight as u128;
    }
    self.total += weight as u128;
    self.prune();
    self.track.newest().map(|e| &e.val)
  }

  /// Fetch, or compute and store on miss; `f` runs at most once
  /// 获取，未命中时计算并存入；`f` 至多执行一次
  pub fn fetch_or_store<F>(&mut self, key: K, f: F) -> Option<&V>
  where
    F: FnOnce() -> V,
  {
    if self.track.contains(&key) {
      return self.fetch(&key);
    }
    let val = f();
    self.store(key, val)
  }
}

impl<K: Hash + Eq + Clone, V, W: Weigh<V>> Extend<(K, V)> for WeightCache<K, V, W> {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    for (key, val) in iter {
      self.store(key, val);
    }
  }
}

impl<K: Hash + Eq + Clone, V, W: Weigh<V>> Cache<K, V> for WeightCache<K, V, W> {
  #[inline]
  fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.fetch(key)
  }

  #[inline]
  fn set(&mut self, key: K, val: V) {
    self.store(key, val);
  }

  #[inline]
  fn rm<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.delete(key)
  }

  #[inline]
  fn has<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.contains(key)
  }
}

#[inline(always)]
fn saturate(total: u128) -> usize {
  usize::try_from(total).unwrap_or(usize::MAX)
}

/// Iterator over resident `(key, value)` pairs
/// 驻留 `(键, 值)` 对的迭代器
pub struct Iter<'a, K, V>(track::Iter<'a, K, V>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(k, e)| (k, &e.val))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<'a, K: Hash + Eq + Clone, V, W> IntoIterator for &'a WeightCache<K, V, W> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
