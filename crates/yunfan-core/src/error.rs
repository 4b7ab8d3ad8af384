//! 安装动作错误类型。
//!
//! 约定：
//! - 动作内部的底层失败（注册表等）以原始错误向上冒泡
//! - 动作边界处以固定上下文消息包装一次后再返回给框架
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use thiserror::Error;

use crate::registry::RegistryError;

/// 安装动作执行错误。
#[derive(Debug, Error)]
pub enum InstallError {
    /// 注册表读写/删除失败。
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// 带固定上下文消息的包装错误（动作边界统一包装）。
    #[error("{context}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<InstallError>,
    },
}

impl InstallError {
    /// 以固定上下文消息包装当前错误。
    pub fn with_context(self, context: &'static str) -> Self {
        InstallError::Context {
            context,
            source: Box::new(self),
        }
    }
}
