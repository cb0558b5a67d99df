//! HVIL（高压互锁）状态监测
//!
//! 由定时器周期性采样 INTLOCK_UP 引脚，并把最近一次的电平和时间戳缓存起来。
//! 本模块与平台无关，硬件访问通过 [`PinReader`]、[`PeriodicTrigger`]、
//! [`TickSource`] 三个 trait 注入。

pub mod error;
pub mod monitor;
pub mod snapshot;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use error::InitError;
pub use monitor::{HvilMonitor, MonitorState};
pub use snapshot::{HvilSnapshot, StatusCache, HVIL_STATUS};
pub use traits::{FireCallback, PeriodicTrigger, PinReader, TickSource};

/// 读取全局 HVIL 状态缓存
pub fn status() -> HvilSnapshot {
    HVIL_STATUS.snapshot()
}
