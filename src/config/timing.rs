//! 采样定时配置
//!
//! 采样周期、计数器分辨率以及由时钟频率推导出的定时器参数

use crate::hvil::InitError;

/// HVIL 状态采样周期（毫秒）
pub const HVIL_SAMPLING_PERIOD_MS: u32 = 10;

/// 定时器计数器分辨率：1 MHz，即每个计数 1 微秒
pub const TIMER_COUNTER_HZ: u32 = 1_000_000;

/// 定时器组的时钟源频率（APB 时钟 80 MHz）
pub const TIMER_SOURCE_CLOCK_HZ: u32 = 80_000_000;

/// 硬件分频器允许的最小值
const MIN_DIVIDER: u32 = 2;

/// 由时钟源频率和采样周期推导出的定时器参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSetup {
    /// 时钟分频系数，分频后计数频率为 `TIMER_COUNTER_HZ`
    pub divider: u32,
    /// 触发一次告警所需的计数值
    pub alarm_ticks: u64,
}

impl TimerSetup {
    /// 推导定时器参数
    ///
    /// # 参数
    /// * `source_clock_hz` - 定时器时钟源频率
    /// * `period_ms` - 触发周期（毫秒）
    ///
    /// # 返回
    /// * `Ok(TimerSetup)` - 参数有效
    /// * `Err(InitError::TimerConfig)` - 周期为 0 或时钟无法分频到 1 MHz
    pub fn derive(source_clock_hz: u32, period_ms: u32) -> Result<Self, InitError> {
        if period_ms == 0 {
            return Err(InitError::TimerConfig("采样周期不能为 0".into()));
        }

        if source_clock_hz % TIMER_COUNTER_HZ != 0 {
            return Err(InitError::TimerConfig(format!(
                "时钟 {source_clock_hz} Hz 无法整数分频到 {TIMER_COUNTER_HZ} Hz"
            )));
        }

        let divider = source_clock_hz / TIMER_COUNTER_HZ;
        if divider < MIN_DIVIDER {
            return Err(InitError::TimerConfig(format!(
                "分频系数 {divider} 小于硬件下限 {MIN_DIVIDER}"
            )));
        }

        let ticks_per_ms = u64::from(TIMER_COUNTER_HZ / 1000);
        Ok(Self {
            divider,
            alarm_ticks: u64::from(period_ms) * ticks_per_ms,
        })
    }

    /// 预分频寄存器值（从 0 开始计数）
    #[inline]
    pub fn prescaler(&self) -> u32 {
        self.divider - 1
    }

    /// 自动重载寄存器值（从 0 开始计数）
    #[inline]
    pub fn reload_value(&self) -> u64 {
        self.alarm_ticks - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling_setup() {
        let setup = TimerSetup::derive(TIMER_SOURCE_CLOCK_HZ, HVIL_SAMPLING_PERIOD_MS).unwrap();

        assert_eq!(setup.divider, 80);
        assert_eq!(setup.alarm_ticks, 10_000);
        assert_eq!(setup.prescaler(), 79);
        assert_eq!(setup.reload_value(), 9_999);
    }

    #[test]
    fn test_other_clock_and_period() {
        let setup = TimerSetup::derive(40_000_000, 250).unwrap();
        assert_eq!(setup.divider, 40);
        assert_eq!(setup.alarm_ticks, 250_000);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = TimerSetup::derive(TIMER_SOURCE_CLOCK_HZ, 0).unwrap_err();
        assert!(matches!(err, InitError::TimerConfig(_)));
    }

    #[test]
    fn test_bad_clock_rejected() {
        // 不能整除 1 MHz
        assert!(matches!(
            TimerSetup::derive(80_500_000, 10),
            Err(InitError::TimerConfig(_))
        ));
        // 分频系数为 1，低于硬件下限
        assert!(matches!(
            TimerSetup::derive(TIMER_COUNTER_HZ, 10),
            Err(InitError::TimerConfig(_))
        ));
        assert!(TimerSetup::derive(0, 10).is_err());
    }
}
