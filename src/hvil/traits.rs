use super::InitError;

/// 定时器触发时调用的回调，运行在中断上下文中
pub type FireCallback = Box<dyn FnMut() + Send + 'static>;

/// 数字输入引脚读取器
pub trait PinReader {
    /// 将引脚配置为浮空输入（无上下拉）
    fn initialize(&mut self) -> Result<(), InitError>;

    /// 读取引脚当前电平，无副作用、不阻塞
    ///
    /// 未配置的引脚返回 `false`
    fn read(&mut self) -> bool;
}

/// 周期触发器
///
/// 启动后每隔 `period_ms` 毫秒调用一次 `on_fire`，直到进程结束，不支持停止。
pub trait PeriodicTrigger {
    fn initialize(&mut self, period_ms: u32, on_fire: FireCallback) -> Result<(), InitError>;
}

/// 单调时钟，返回开机以来的毫秒数
pub trait TickSource {
    fn now_ms(&self) -> u64;
}
