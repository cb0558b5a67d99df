//! 配置宏
//!
//! 提供简化外设配置使用的宏

/// 配置外设的宏
///
/// 从外设管理器获取 HVIL 监测所需的外设，失败时记录日志并以 `anyhow::Error` 返回。
///
/// # 示例
/// ```ignore
/// let peripherals = configure_peripherals!();
/// let pin = IntlockPin::new(peripherals.intlock_up);
/// ```
#[macro_export]
macro_rules! configure_peripherals {
    () => {{
        use $crate::config::pins::PIN_CONFIG;

        $crate::configure_peripherals!(&PIN_CONFIG)
    }};

    ($config:expr) => {{
        use $crate::config::PeripheralManager;

        let manager = match PeripheralManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                log::error!("外设管理器初始化失败: {}", e);
                return Err(anyhow::anyhow!("外设管理器初始化失败: {}", e));
            }
        };

        match manager.configure($config) {
            Ok(peripherals) => peripherals,
            Err(e) => {
                log::error!("外设配置失败: {}", e);
                return Err(anyhow::anyhow!("外设配置失败: {}", e));
            }
        }
    }};
}
