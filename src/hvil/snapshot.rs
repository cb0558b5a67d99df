use core::cell::Cell;
use core::fmt;

use critical_section::{CriticalSection, Mutex};

/// 进程内唯一的 HVIL 状态缓存，只由采样回调写入
pub static HVIL_STATUS: StatusCache = StatusCache::new();

/// 一次采样的结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HvilSnapshot {
    /// INTLOCK_UP 引脚电平
    pub current_state: bool,
    /// 采样时刻（开机以来毫秒数）
    pub last_read_time: u64,
}

impl HvilSnapshot {
    pub const fn new(current_state: bool, last_read_time: u64) -> Self {
        Self {
            current_state,
            last_read_time,
        }
    }
}

impl fmt::Display for HvilSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.current_state { "HIGH" } else { "LOW" };
        write!(f, "{level} @ {} ms", self.last_read_time)
    }
}

/// HVIL 状态缓存
///
/// 两个字段在临界区内整体读写，读者不会看到电平和时间戳不匹配的中间状态，
/// 即使平台允许中断嵌套也一样。
pub struct StatusCache {
    inner: Mutex<Cell<HvilSnapshot>>,
}

impl StatusCache {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(HvilSnapshot::new(false, 0))),
        }
    }

    /// 读取完整快照
    pub fn snapshot(&self) -> HvilSnapshot {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// 最近一次采样的电平
    pub fn current_state(&self) -> bool {
        self.snapshot().current_state
    }

    /// 最近一次采样的时间
    pub fn last_read_time(&self) -> u64 {
        self.snapshot().last_read_time
    }

    /// 在调用方已持有的临界区内写入快照
    pub(crate) fn store(&self, cs: CriticalSection<'_>, snapshot: HvilSnapshot) {
        self.inner.borrow(cs).set(snapshot);
    }

    /// 恢复为初始值 `(false, 0)`
    pub(crate) fn reset(&self) {
        critical_section::with(|cs| self.store(cs, HvilSnapshot::default()));
    }
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new()
    }
}
