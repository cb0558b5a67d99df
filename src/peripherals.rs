//! ESP-IDF 外设适配
//!
//! 为 HVIL 监测提供 `PinReader`、`PeriodicTrigger`、`TickSource` 的硬件实现

pub mod intlock_pin;
pub mod sample_timer;
pub mod tick;

pub use intlock_pin::IntlockPin;
pub use sample_timer::SampleTimer;
pub use tick::EspTickSource;
