use core::cell::RefCell;
use std::sync::Arc;

use critical_section::Mutex;

use super::{FireCallback, HvilSnapshot, InitError, PeriodicTrigger, PinReader, StatusCache, TickSource};
use crate::config::timing::HVIL_SAMPLING_PERIOD_MS;

/// 监测器状态，只能从 `Uninitialized` 单向进入 `Initialized`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Uninitialized,
    Initialized,
}

/// HVIL 监测器
///
/// 负责初始化 INTLOCK_UP 引脚和采样定时器，并注册把引脚电平写入
/// [`StatusCache`] 的采样回调。引脚在前台和中断回调之间通过临界区共享。
pub struct HvilMonitor<P, T, C> {
    pin: Arc<Mutex<RefCell<P>>>,
    trigger: T,
    ticks: Arc<C>,
    cache: &'static StatusCache,
    period_ms: u32,
    state: MonitorState,
}

impl<P, T, C> HvilMonitor<P, T, C>
where
    P: PinReader + Send + 'static,
    T: PeriodicTrigger,
    C: TickSource + Send + Sync + 'static,
{
    /// 创建监测器，采样周期默认为 `HVIL_SAMPLING_PERIOD_MS`
    ///
    /// # 参数
    /// * `pin` - INTLOCK_UP 引脚读取器
    /// * `trigger` - 周期触发器
    /// * `ticks` - 采样时间戳来源
    /// * `cache` - 采样结果写入的缓存，固件中为 [`super::HVIL_STATUS`]
    pub fn new(pin: P, trigger: T, ticks: C, cache: &'static StatusCache) -> Self {
        Self {
            pin: Arc::new(Mutex::new(RefCell::new(pin))),
            trigger,
            ticks: Arc::new(ticks),
            cache,
            period_ms: HVIL_SAMPLING_PERIOD_MS,
            state: MonitorState::Uninitialized,
        }
    }

    /// 覆盖默认采样周期
    pub fn with_period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = period_ms;
        self
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == MonitorState::Initialized
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// 采样结果所在的缓存（只读）
    pub fn cache(&self) -> &'static StatusCache {
        self.cache
    }

    /// 初始化 HVIL 监测
    ///
    /// 依次配置引脚、清空缓存、启动采样定时器。任一步失败立即返回该错误，
    /// 已完成的步骤不做回滚，监测器保持 `Uninitialized`。
    ///
    /// # 返回
    /// * `Ok(())` - 监测已启动
    /// * `Err(InitError)` - 引脚或定时器初始化失败，或已初始化过
    pub fn init_system(&mut self) -> Result<(), InitError> {
        if self.is_initialized() {
            log::warn!("HVIL 监测已初始化，忽略重复调用");
            return Err(InitError::AlreadyInitialized);
        }

        if let Err(e) = self.with_pin(|pin| pin.initialize()) {
            log::error!("{e}");
            return Err(e);
        }
        log::debug!("INTLOCK_UP 引脚已配置为浮空输入");

        // 定时器启动前清空缓存，保证第一次采样前读到的是 (false, 0)
        self.cache.reset();

        let on_fire = self.sample_callback();
        if let Err(e) = self.trigger.initialize(self.period_ms, on_fire) {
            log::error!("{e}");
            return Err(e);
        }

        self.state = MonitorState::Initialized;
        log::info!("HVIL 监测已启动，采样周期 {} ms", self.period_ms);
        Ok(())
    }

    /// 直接读取 INTLOCK_UP 引脚的实时电平，不经过缓存
    pub fn read_status(&mut self) -> bool {
        self.with_pin(|pin| pin.read())
    }

    /// 构造采样回调：读引脚、取时间戳，在同一个临界区内写入缓存
    fn sample_callback(&self) -> FireCallback {
        let pin = Arc::clone(&self.pin);
        let ticks = Arc::clone(&self.ticks);
        let cache = self.cache;

        Box::new(move || {
            critical_section::with(|cs| {
                let level = pin.borrow_ref_mut(cs).read();
                cache.store(cs, HvilSnapshot::new(level, ticks.now_ms()));
            });
        })
    }

    /// 访问引脚。回调尚未持有引脚时无需进入临界区，
    /// 这样引脚配置时可以正常输出日志
    fn with_pin<R>(&mut self, f: impl FnOnce(&mut P) -> R) -> R {
        match Arc::get_mut(&mut self.pin) {
            Some(pin) => f(pin.get_mut().get_mut()),
            None => critical_section::with(|cs| f(&mut *self.pin.borrow_ref_mut(cs))),
        }
    }
}
