use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid max weight {0}, must be non-negative / 最大权重无效，不能为负")]
  InvalidMaxWeight(i64),

  #[error("max weight {0} exceeds usize on this target / 最大权重超出本平台 usize 范围")]
  MaxWeightTooLarge(i64),

  #[error("invalid mode {0:?}, expected lru or rr / 模式无效，应为 lru 或 rr")]
  InvalidMode(String),
}

impl Error {
  /// Rejected construction argument / 构造参数被拒绝
  pub fn is_invalid_conf(&self) -> bool {
    matches!(self, Self::InvalidMaxWeight(_) | Self::MaxWeightTooLarge(_) | Self::InvalidMode(_))
  }
}

pub type Result<T> = std::result::Result<T, Error>;
