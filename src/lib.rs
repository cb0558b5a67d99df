//! INTLOCK_UP 高压互锁状态监测固件
//!
//! 每 10 ms 由硬件定时器采样一次互锁引脚，缓存最近的电平和采样时间。

#[macro_use]
mod macros;

pub mod config;
pub mod hvil;
#[cfg(target_os = "espidf")]
pub mod peripherals;
