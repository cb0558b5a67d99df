use embedded_hal::digital::InputPin;
use esp_idf_svc::hal::gpio::{AnyIOPin, Input, PinDriver, Pull};

use crate::hvil::{InitError, PinReader};

/// INTLOCK_UP 引脚封装
pub struct IntlockPin {
    pin: Option<AnyIOPin>,
    driver: Option<PinDriver<'static, AnyIOPin, Input>>,
}

impl IntlockPin {
    /// 创建引脚封装，调用 `initialize` 之前不会配置硬件
    ///
    /// # Arguments
    /// * `pin` - INTLOCK_UP 对应的 GPIO
    pub fn new(pin: AnyIOPin) -> Self {
        Self {
            pin: Some(pin),
            driver: None,
        }
    }
}

impl PinReader for IntlockPin {
    fn initialize(&mut self) -> Result<(), InitError> {
        let pin = self
            .pin
            .take()
            .ok_or_else(|| InitError::PinConfig("引脚已被配置".into()))?;

        let mut driver = PinDriver::input(pin)
            .map_err(|e| InitError::PinConfig(format!("设置输入模式失败: {e}")))?;
        driver
            .set_pull(Pull::Floating)
            .map_err(|e| InitError::PinConfig(format!("关闭上下拉失败: {e}")))?;

        self.driver = Some(driver);
        Ok(())
    }

    fn read(&mut self) -> bool {
        self.driver
            .as_mut()
            .is_some_and(|driver| InputPin::is_high(driver).unwrap_or(false))
    }
}
