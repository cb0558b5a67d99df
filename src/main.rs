#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::thread::sleep;
    use std::time::Duration;

    use hvil_monitor::config::timing::TIMER_SOURCE_CLOCK_HZ;
    use hvil_monitor::hvil::{self, HvilMonitor, HVIL_STATUS};
    use hvil_monitor::peripherals::{EspTickSource, IntlockPin, SampleTimer};

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = hvil_monitor::configure_peripherals!();

    let pin = IntlockPin::new(peripherals.intlock_up);
    let timer = SampleTimer::new(peripherals.sample_timer, TIMER_SOURCE_CLOCK_HZ);
    let mut monitor = HvilMonitor::new(pin, timer, EspTickSource, &HVIL_STATUS);

    if let Err(e) = monitor.init_system() {
        log::error!("HVIL 监测初始化失败: {e}");
        return Err(anyhow::anyhow!("HVIL 监测初始化失败: {e}"));
    }

    loop {
        sleep(Duration::from_secs(1));
        log::info!(
            "HVIL 缓存: {}, 实时电平: {}",
            hvil::status(),
            monitor.read_status()
        );
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("hvil-monitor 固件只能运行在 ESP-IDF 目标上 (target_os = \"espidf\")");
}
