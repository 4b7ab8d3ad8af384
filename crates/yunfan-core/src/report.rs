//! 失败上报能力接口。
//!
//! 设计：
//! - 上报器作为能力注入动作执行上下文，避免进程级全局函数
//! - 整体失败策略由框架（yunfan-setup）决定；动作只负责上报并返回错误
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use crate::error::InstallError;

/// 致命失败上报接口。
pub trait FailureSink {
    /// 上报一次致命失败。
    ///
    /// 参数：
    /// - `context`：固定上下文消息（描述失败的动作环节）
    /// - `error`：原始错误（未经包装）
    fn fatal(&self, context: &str, error: &InstallError);
}

/// 空实现：无需上报的场景与测试使用。
#[derive(Debug, Default)]
pub struct NullFailureSink;

impl FailureSink for NullFailureSink {
    fn fatal(&self, _context: &str, _error: &InstallError) {}
}
