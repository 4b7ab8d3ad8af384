//! 安装动作框架（动作接口、执行上下文与生命周期模式）。
//!
//! 约定：
//! - 动作由上层（yunfan-setup）按清单顺序串行执行，单线程、不中断重试
//! - 平台/注册表/进度/失败上报均通过 [`ActionContext`] 注入，不依赖全局状态
//! - 同一产品的安装动作先于之后的卸载动作执行，由上层保证串行
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

pub mod uninstall_entry;

use crate::error::InstallError;
use crate::platform::PlatformDescriptor;
use crate::product::InstallProduct;
use crate::progress::ProgressMonitor;
use crate::registry::RegistryWriter;
use crate::report::FailureSink;

/// 生命周期模式：本次执行是安装还是卸载。
///
/// 说明：
/// - 模式由框架按次传入，动作自身不保存模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// 安装。
    Install,
    /// 卸载。
    Uninstall,
}

/// 动作执行上下文（能力注入点）。
pub struct ActionContext<'a> {
    /// 产品信息。
    pub product: &'a InstallProduct,
    /// 当前平台描述。
    pub platform: &'a PlatformDescriptor,
    /// 注册表写入端口。
    pub registry: &'a mut dyn RegistryWriter,
    /// 进度监视器。
    pub progress: &'a mut dyn ProgressMonitor,
    /// 致命失败上报器。
    pub reporter: &'a dyn FailureSink,
}

/// 安装动作接口。
pub trait InstallAction {
    /// 动作标识（用于日志）。
    fn id(&self) -> &str;

    /// 该动作是否适用于给定平台。
    ///
    /// 默认适用于所有平台；平台受限的动作覆盖本方法。
    fn is_supported(&self, _platform: &PlatformDescriptor) -> bool {
        true
    }

    /// 执行动作。
    ///
    /// 参数：
    /// - `ctx`：执行上下文（产品、平台与各能力接口）
    /// - `mode`：本次执行的生命周期模式
    ///
    /// 异常处理：
    /// - 动作内部失败应上报到 `ctx.reporter` 并以包装后的错误返回
    fn run(&self, ctx: &mut ActionContext<'_>, mode: InstallMode) -> Result<(), InstallError>;
}
