use thiserror::Error;

/// HVIL 监测初始化错误
///
/// 初始化的任何一步失败都归为此类型，调用方只关心成功与否时可用 `is_ok()`。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("INTLOCK_UP 引脚配置失败: {0}")]
    PinConfig(String),

    #[error("采样定时器配置失败: {0}")]
    TimerConfig(String),

    #[error("采样定时器启动失败: {0}")]
    TimerStart(String),

    #[error("HVIL 监测已初始化")]
    AlreadyInitialized,
}
