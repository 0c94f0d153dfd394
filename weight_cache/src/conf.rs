//! Cache configuration
//! 缓存配置

use crate::{Error, Mode, Result};

/// Cache configuration options, later options override earlier ones
/// 缓存配置选项，后出现的覆盖先出现的
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Max cumulative weight; negative, or above `usize::MAX`, is rejected
  /// 最大累计权重；负数或超过 `usize::MAX` 被拒绝
  MaxWeight(i64),

  /// Remove any cap set earlier
  /// 移除此前设置的上限
  Uncapped,

  /// Eviction mode
  /// 淘汰模式
  Mode(Mode),

  /// Seed for random replacement, ignored by LRU
  /// 随机替换的种子，LRU 忽略
  Seed(u64),
}

/// Resolved configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub max_weight: Option<usize>,
  pub mode: Mode,
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      max_weight: default::MAX_WEIGHT,
      mode: default::MODE,
      seed: None,
    }
  }
}

impl TryFrom<&[Conf]> for Config {
  type Error = Error;

  fn try_from(conf_li: &[Conf]) -> Result<Self> {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::MaxWeight(v) => {
          if v < 0 {
            return Err(Error::InvalidMaxWeight(v));
          }
          // Only 32-bit targets can reject a positive i64
          // 仅 32 位平台会拒绝正的 i64
          let max = usize::try_from(v).map_err(|_| Error::MaxWeightTooLarge(v))?;
          config.max_weight = Some(max);
        }
        Conf::Uncapped => config.max_weight = None,
        Conf::Mode(v) => config.mode = v,
        Conf::Seed(v) => config.seed = Some(v),
      }
    }
    if config.seed.is_some() && config.mode == Mode::Lru {
      log::warn!("Seed has no effect in lru mode");
    }
    Ok(config)
  }
}

/// Default values
/// 默认值
pub mod default {
  use crate::Mode;

  /// Uncapped
  /// 不限容
  pub const MAX_WEIGHT: Option<usize> = None;

  pub const MODE: Mode = Mode::Lru;
}
