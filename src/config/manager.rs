//! 外设管理器
//!
//! 安全地管理 INTLOCK_UP 引脚和采样定时器的所有权，防止冲突使用

use esp_idf_svc::hal::{
    gpio::AnyIOPin,
    peripheral::Peripheral,
    peripherals::Peripherals,
    timer::TIMER00,
};
use std::collections::HashSet;
use thiserror::Error;

use crate::config::pins::PinConfig;

/// 外设配置集合
///
/// 包含 HVIL 监测所需的外设，所有权已从管理器转移
pub struct PeripheralConfig {
    /// INTLOCK_UP 互锁状态输入引脚
    pub intlock_up: AnyIOPin,

    /// 用于 10 ms 周期采样的硬件定时器（定时器组 0 的定时器 0）
    pub sample_timer: TIMER00,
}

/// 外设管理器错误类型
#[derive(Debug, Error)]
pub enum PeripheralError {
    #[error("引脚 {0} 已被使用")]
    PinAlreadyUsed(u8),

    #[error("无效的引脚编号: {0}")]
    InvalidPin(u8),

    #[error("外设初始化失败: {0}")]
    PeripheralInit(String),
}

/// 外设管理器
///
/// 使用 `clone_unchecked()` 允许按编号取用引脚，同时跟踪已使用的引脚防止冲突。
pub struct PeripheralManager {
    peripherals: Peripherals,
    used_pins: HashSet<u8>,
}

impl PeripheralManager {
    /// 创建新的外设管理器
    ///
    /// # 返回
    /// * `Ok(Self)` - 管理器创建成功
    /// * `Err(PeripheralError)` - 外设已被获取
    pub fn new() -> Result<Self, PeripheralError> {
        let peripherals = Peripherals::take()
            .map_err(|e| PeripheralError::PeripheralInit(format!("获取外设失败: {e}")))?;

        Ok(Self {
            peripherals,
            used_pins: HashSet::new(),
        })
    }

    /// 根据引脚配置获取 HVIL 监测所需的外设
    ///
    /// # 参数
    /// * `config` - 引脚配置
    pub fn configure(mut self, config: &PinConfig) -> Result<PeripheralConfig, PeripheralError> {
        crate::config::pins::validate_config(config)
            .map_err(PeripheralError::PeripheralInit)?;

        let intlock_up = self.take_gpio(config.intlock_up)?;
        log::debug!("INTLOCK_UP 使用 GPIO{}", config.intlock_up);

        Ok(PeripheralConfig {
            intlock_up,
            sample_timer: self.peripherals.timer00,
        })
    }

    /// 安全地获取 GPIO 引脚
    ///
    /// # 参数
    /// * `pin_num` - GPIO 引脚编号
    ///
    /// # 返回
    /// * `Ok(AnyIOPin)` - 引脚获取成功
    /// * `Err(PeripheralError)` - 引脚已被使用或无效
    pub fn take_gpio(&mut self, pin_num: u8) -> Result<AnyIOPin, PeripheralError> {
        if self.used_pins.contains(&pin_num) {
            return Err(PeripheralError::PinAlreadyUsed(pin_num));
        }

        let pins = &mut self.peripherals.pins;
        let pin = match pin_num {
            0 => unsafe { pins.gpio0.clone_unchecked() }.into(),
            1 => unsafe { pins.gpio1.clone_unchecked() }.into(),
            2 => unsafe { pins.gpio2.clone_unchecked() }.into(),
            3 => unsafe { pins.gpio3.clone_unchecked() }.into(),
            4 => unsafe { pins.gpio4.clone_unchecked() }.into(),
            5 => unsafe { pins.gpio5.clone_unchecked() }.into(),
            6 => unsafe { pins.gpio6.clone_unchecked() }.into(),
            7 => unsafe { pins.gpio7.clone_unchecked() }.into(),
            8 => unsafe { pins.gpio8.clone_unchecked() }.into(),
            9 => unsafe { pins.gpio9.clone_unchecked() }.into(),
            10 => unsafe { pins.gpio10.clone_unchecked() }.into(),
            11 => unsafe { pins.gpio11.clone_unchecked() }.into(),
            12 => unsafe { pins.gpio12.clone_unchecked() }.into(),
            13 => unsafe { pins.gpio13.clone_unchecked() }.into(),
            14 => unsafe { pins.gpio14.clone_unchecked() }.into(),
            15 => unsafe { pins.gpio15.clone_unchecked() }.into(),
            16 => unsafe { pins.gpio16.clone_unchecked() }.into(),
            17 => unsafe { pins.gpio17.clone_unchecked() }.into(),
            18 => unsafe { pins.gpio18.clone_unchecked() }.into(),
            19 => unsafe { pins.gpio19.clone_unchecked() }.into(),
            21 => unsafe { pins.gpio21.clone_unchecked() }.into(),
            _ => return Err(PeripheralError::InvalidPin(pin_num)),
        };

        self.used_pins.insert(pin_num);
        Ok(pin)
    }
}
