//! Eviction mode
//! 淘汰模式

use std::{fmt, str::FromStr};

use crate::Error;

/// Eviction policy, fixed for the lifetime of a cache
/// 淘汰策略，缓存生命周期内固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
  /// Least Recently Used: evict the entry least recently read or written
  /// 最近最少使用：淘汰最久未读写的条目
  #[default]
  Lru,
  /// Random Replacement: evict a uniformly random entry
  /// 随机替换：均匀随机淘汰一个条目
  Rr,
}

impl Mode {
  pub const fn name(self) -> &'static str {
    match self {
      Self::Lru => "lru",
      Self::Rr => "rr",
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Mode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("lru") {
      Ok(Self::Lru)
    } else if s.eq_ignore_ascii_case("rr") {
      Ok(Self::Rr)
    } else {
      Err(Error::InvalidMode(s.to_owned()))
    }
  }
}
