use esp_idf_svc::hal::timer::{config::Config as TimerConfig, TimerDriver, TIMER00};
use esp_idf_svc::sys::EspError;

use crate::config::TimerSetup;
use crate::hvil::{FireCallback, InitError, PeriodicTrigger};

/// 基于定时器组硬件定时器的周期触发器
///
/// 计数器按 `TimerSetup` 分频到 1 MHz，告警后自动重载，回调在定时器中断中执行。
pub struct SampleTimer {
    timer: Option<TIMER00>,
    driver: Option<TimerDriver<'static>>,
    source_clock_hz: u32,
}

impl SampleTimer {
    /// # Arguments
    /// * `timer` - 用于采样的硬件定时器
    /// * `source_clock_hz` - 定时器时钟源频率
    pub fn new(timer: TIMER00, source_clock_hz: u32) -> Self {
        Self {
            timer: Some(timer),
            driver: None,
            source_clock_hz,
        }
    }
}

fn config_err(e: EspError) -> InitError {
    InitError::TimerConfig(e.to_string())
}

fn start_err(e: EspError) -> InitError {
    InitError::TimerStart(e.to_string())
}

impl PeriodicTrigger for SampleTimer {
    fn initialize(&mut self, period_ms: u32, on_fire: FireCallback) -> Result<(), InitError> {
        let setup = TimerSetup::derive(self.source_clock_hz, period_ms)?;
        let timer = self
            .timer
            .take()
            .ok_or_else(|| InitError::TimerConfig("定时器已被占用".into()))?;

        let config = TimerConfig::new().divider(setup.divider).auto_reload(true);
        let mut driver = TimerDriver::new(timer, &config).map_err(config_err)?;
        driver.set_counter(0).map_err(config_err)?;
        driver.set_alarm(setup.alarm_ticks).map_err(config_err)?;
        log::debug!(
            "采样定时器: 计数频率 {} Hz, 分频 {}, 告警计数 {}",
            driver.tick_hz(),
            setup.divider,
            setup.alarm_ticks
        );

        // 回调只做一次引脚读取和缓存写入，可以在中断上下文中运行
        unsafe { driver.subscribe(on_fire) }.map_err(start_err)?;
        driver.enable_interrupt().map_err(start_err)?;
        driver.enable_alarm(true).map_err(start_err)?;
        driver.enable(true).map_err(start_err)?;

        self.driver = Some(driver);
        Ok(())
    }
}
