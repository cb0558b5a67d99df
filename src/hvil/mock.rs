//! 单元测试用的引脚、触发器和时钟替身

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{FireCallback, InitError, PeriodicTrigger, PinReader, StatusCache, TickSource};

/// 每个测试独立的缓存，避免并行测试共用 `HVIL_STATUS`
pub(crate) fn leak_cache() -> &'static StatusCache {
    Box::leak(Box::new(StatusCache::new()))
}

/// 可由测试控制电平的引脚，克隆体共享电平和初始化计数
#[derive(Clone)]
pub(crate) struct FakePin {
    level: Arc<AtomicBool>,
    init_calls: Arc<AtomicUsize>,
    fail_init: bool,
    configured: bool,
}

impl FakePin {
    pub(crate) fn new(level: bool) -> Self {
        Self {
            level: Arc::new(AtomicBool::new(level)),
            init_calls: Arc::new(AtomicUsize::new(0)),
            fail_init: false,
            configured: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::new(false)
        }
    }

    pub(crate) fn set_level(&self, level: bool) {
        self.level.store(level, Ordering::SeqCst);
    }

    pub(crate) fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

impl PinReader for FakePin {
    fn initialize(&mut self) -> Result<(), InitError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(InitError::PinConfig("fake".into()));
        }
        self.configured = true;
        Ok(())
    }

    fn read(&mut self) -> bool {
        self.configured && self.level.load(Ordering::SeqCst)
    }
}

/// 保存回调的触发器，由测试调用 `fire()` 模拟一次定时器中断
#[derive(Clone)]
pub(crate) struct FakeTrigger {
    callback: Arc<Mutex<Option<FireCallback>>>,
    period_ms: Arc<AtomicU32>,
    attempts: Arc<AtomicUsize>,
    failure: Option<InitError>,
}

impl FakeTrigger {
    pub(crate) fn new() -> Self {
        Self {
            callback: Arc::new(Mutex::new(None)),
            period_ms: Arc::new(AtomicU32::new(0)),
            attempts: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    pub(crate) fn failing(err: InitError) -> Self {
        Self {
            failure: Some(err),
            ..Self::new()
        }
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// 已启动时返回注册的周期
    pub(crate) fn period_ms(&self) -> Option<u32> {
        match self.period_ms.load(Ordering::SeqCst) {
            0 => None,
            period => Some(period),
        }
    }

    pub(crate) fn fire(&self) {
        let mut callback = self.callback.lock().unwrap();
        let on_fire = callback.as_mut().expect("trigger not started");
        on_fire();
    }
}

impl PeriodicTrigger for FakeTrigger {
    fn initialize(&mut self, period_ms: u32, on_fire: FireCallback) -> Result<(), InitError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.period_ms.store(period_ms, Ordering::SeqCst);
        *self.callback.lock().unwrap() = Some(on_fire);
        Ok(())
    }
}

/// 手动推进的毫秒时钟
#[derive(Clone, Default)]
pub(crate) struct FakeTicks {
    now: Arc<AtomicU64>,
}

impl FakeTicks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl TickSource for FakeTicks {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
