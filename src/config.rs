//! 外设与采样配置模块
//!
//! 提供 HVIL 引脚、采样定时器的配置定义和管理器

pub mod pins;
pub mod timing;
#[cfg(target_os = "espidf")]
pub mod manager;

// 重新导出常用类型
#[cfg(target_os = "espidf")]
pub use manager::PeripheralManager;
pub use timing::TimerSetup;
