//! 平台描述（操作系统家族与架构）。
//!
//! 设计：
//! - 平台信息作为“值”注入动作执行上下文，动作内部不做进程级全局判断
//! - 这样可以在任意构建平台上以模拟平台运行测试
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

/// Windows 可执行文件扩展名（不含点号）。
pub const EXTENSION_EXE: &str = "exe";

/// 操作系统家族。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// Windows 家族（任意架构）。
    Windows,
    /// Linux 家族。
    Linux,
    /// macOS 家族。
    MacOs,
    /// 其他/未识别平台。
    Other,
}

/// 平台描述：家族 + 架构。
///
/// 说明：
/// - `arch` 目前仅作展示/审计用途，没有按架构分支的动作
#[derive(Debug, Clone)]
pub struct PlatformDescriptor {
    /// 操作系统家族。
    pub family: PlatformFamily,
    /// 架构标识（如 `x86_64` / `aarch64`）。
    pub arch: String,
}

impl PlatformDescriptor {
    /// 构造指定平台描述（测试模拟平台时使用）。
    pub fn new(family: PlatformFamily, arch: impl Into<String>) -> Self {
        Self {
            family,
            arch: arch.into(),
        }
    }

    /// 探测当前运行平台。
    ///
    /// 返回值：
    /// - 根据 `std::env::consts::{OS, ARCH}` 推断出的平台描述
    pub fn current() -> Self {
        let family = match std::env::consts::OS {
            "windows" => PlatformFamily::Windows,
            "linux" => PlatformFamily::Linux,
            "macos" => PlatformFamily::MacOs,
            _ => PlatformFamily::Other,
        };
        Self {
            family,
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// 是否属于 Windows 家族。
    pub fn is_windows(&self) -> bool {
        matches!(self.family, PlatformFamily::Windows)
    }
}
