use crate::hvil::TickSource;

/// 基于 `esp_timer` 的开机毫秒计数
#[derive(Debug, Clone, Copy, Default)]
pub struct EspTickSource;

impl TickSource for EspTickSource {
    fn now_ms(&self) -> u64 {
        // esp_timer_get_time 返回开机以来的微秒数，只增不减
        let us = unsafe { esp_idf_sys::esp_timer_get_time() };
        (us / 1000) as u64
    }
}
