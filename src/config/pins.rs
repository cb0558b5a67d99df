//! 引脚配置定义
//!
//! 定义 HVIL 监测使用的 GPIO 引脚配置

/// 可用作 INTLOCK_UP 输入的 GPIO 引脚
pub const VALID_PINS: [u8; 21] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 21];

/// 引脚配置结构体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// HVIL 互锁状态输入引脚 INTLOCK_UP (GPIO4)
    pub intlock_up: u8,
}

/// 默认引脚配置
///
/// - INTLOCK_UP: GPIO4
pub const PIN_CONFIG: PinConfig = PinConfig { intlock_up: 4 };

/// 验证引脚配置的有效性
///
/// # 参数
/// * `config` - 要验证的引脚配置
///
/// # 返回
/// * `Ok(())` - 配置有效
/// * `Err(String)` - 配置无效，包含错误信息
pub fn validate_config(config: &PinConfig) -> Result<(), String> {
    let pin = config.intlock_up;
    if !VALID_PINS.contains(&pin) {
        return Err(format!("引脚 {pin} 不是有效的 GPIO 引脚。有效引脚: {VALID_PINS:?}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PIN_CONFIG).is_ok());
        assert_eq!(PIN_CONFIG.intlock_up, 4);
    }

    #[test]
    fn test_invalid_pin_rejected() {
        // GPIO20 在 ESP32 上不可用
        let err = validate_config(&PinConfig { intlock_up: 20 }).unwrap_err();
        assert!(err.contains("20"));

        assert!(validate_config(&PinConfig { intlock_up: 40 }).is_err());
    }
}
