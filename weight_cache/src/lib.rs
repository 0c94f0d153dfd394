//! Weight-bounded cache with LRU or RR eviction
//! 按权重限容的缓存，支持 LRU 或 RR 淘汰
//!
//! Capacity is the sum of value weights, not the entry count. Every mutation
//! that may exceed the cap prunes victims chosen by the fixed [`Mode`].
//! 容量为值权重之和而非条目数。可能超限的每次变更都按固定的 [`Mode`] 淘汰。
//!
//! # Complexity
//! 复杂度
//!
//! - fetch / contains / delete: O(1)
//! - store: O(1) amortized + O(evicted)

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::{borrow::Borrow, hash::Hash};

pub mod cache;
pub mod conf;
pub mod error;
pub mod mode;
mod track;
pub mod weigh;

pub use cache::{Iter, WeightCache};
pub use conf::{Conf, Config};
pub use error::{Error, Result};
pub use mode::Mode;
pub use weigh::{Len, One, Weigh, Weight};

/// Minimal store / membership surface
/// 最小的存取 / 成员接口
///
/// Lets callers re-register restored state without knowing cache internals.
/// 调用方可借此重新登记恢复的状态，而无需了解缓存内部。
pub trait Cache<K, V> {
  /// Get value by key
  /// 按键获取值
  fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized;

  /// Insert key-value pair
  /// 插入键值对
  fn set(&mut self, key: K, val: V);

  /// Remove by key, returning the value
  /// 按键删除并返回值
  fn rm<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized;

  /// Membership test
  /// 成员检测
  fn has<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized;
}
