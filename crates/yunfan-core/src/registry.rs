//! 注册表写入端口（接口与错误分类）。
//!
//! 说明：
//! - 本模块只定义接口与错误类型，不包含任何 Win32 调用
//! - Windows 实现位于 `yunfan-windows`；测试可注入内存实现
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use std::io;

use thiserror::Error;

/// 注册表根键。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryHive {
    /// HKEY_LOCAL_MACHINE。
    Hklm,
    /// HKEY_CURRENT_USER。
    Hkcu,
}

/// 注册表操作错误类型。
///
/// 用途：
/// - 区分打开/写值/删键三类失败点并携带底层 IO 错误，便于排障
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 打开或创建子键失败。
    #[error("打开/创建注册表键失败: {key}")]
    OpenKey {
        key: String,
        #[source]
        source: io::Error,
    },
    /// 写入值失败。
    #[error("写入注册表值失败: {key}\\{name}")]
    SetValue {
        key: String,
        name: String,
        #[source]
        source: io::Error,
    },
    /// 删除子键失败。
    #[error("删除注册表键失败: {key}")]
    DeleteKey {
        key: String,
        #[source]
        source: io::Error,
    },
    /// 当前平台不支持注册表操作。
    #[error("当前平台不支持注册表操作")]
    Unsupported,
}

/// 注册表写入端口。
///
/// 约定：
/// - `key` 为不含根键的子键路径（`\` 分隔）
/// - 字符串值写为 REG_SZ，整数值写为 REG_DWORD
/// - `delete_key` 删除整个子键及其全部值；子键不存在视为成功（幂等）
pub trait RegistryWriter {
    /// 写入字符串值（REG_SZ）。
    fn set_string_value(
        &mut self,
        hive: RegistryHive,
        key: &str,
        name: &str,
        value: &str,
    ) -> Result<(), RegistryError>;

    /// 写入整数值（REG_DWORD）。
    fn set_dword_value(
        &mut self,
        hive: RegistryHive,
        key: &str,
        name: &str,
        value: u32,
    ) -> Result<(), RegistryError>;

    /// 删除子键（含全部值）。
    fn delete_key(&mut self, hive: RegistryHive, key: &str) -> Result<(), RegistryError>;
}
