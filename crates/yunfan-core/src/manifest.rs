//! 安装清单（setup-manifest.json）模型定义。
//!
//! 该模块描述安装程序需要的全部输入：
//! - 产品信息（名称/标识/版本）
//! - 控制面板卸载注册配置（卸载器位置、发行方、帮助链接、安装大小等）
//!
//! 约定：
//! - 大部分字段通过 `#[serde(default)]` 提供默认值，以便清单向前兼容
//! - 该模块仅定义数据结构，不执行任何 IO/系统修改
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use serde::{Deserialize, Serialize};

/// 安装清单根对象（对应 `setup-manifest.json`）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupManifest {
    /// 产品显示名称。
    pub product_name: String,
    /// 产品标识（用于注册表键路径等系统落点）。
    pub product_code: String,
    /// 版本号（用于展示/审计）。
    pub version: String,
    #[serde(default)]
    /// 控制面板卸载注册配置。
    pub uninstall_entry: UninstallEntryManifest,
}

/// 控制面板卸载注册配置。
///
/// 说明：
/// - `uninstall_location` 为空时安装阶段不执行注册（没有落点无从注册）
/// - `estimated_size_kb` 为 `-1` 表示“未统计”，此时不写入 EstimatedSize；
///   该哨兵值是既有安装记录的外部兼容契约，须原样保留
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UninstallEntryManifest {
    #[serde(default = "default_enabled")]
    /// 是否启用该动作。
    pub enabled: bool,
    #[serde(default)]
    /// 卸载器所在目录（Windows 路径形式）。
    pub uninstall_location: Option<String>,
    #[serde(default)]
    /// 发行方名称（写入 Publisher；为空则不写）。
    pub vendor: Option<String>,
    #[serde(default)]
    /// 显示版本（写入 DisplayVersion；为空则不写）。
    pub version: Option<String>,
    #[serde(default)]
    /// 帮助链接（写入 HelpLink；为空则不写）。
    pub help_link: Option<String>,
    #[serde(default = "default_uninstaller_name")]
    /// 卸载器可执行文件基础名（不含扩展名）。
    pub uninstaller_name: String,
    #[serde(default = "default_estimated_size_kb")]
    /// 安装大小（KB）；`-1` 表示未统计。
    pub estimated_size_kb: i32,
}

impl Default for UninstallEntryManifest {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            uninstall_location: None,
            vendor: None,
            version: None,
            help_link: None,
            uninstaller_name: default_uninstaller_name(),
            estimated_size_kb: default_estimated_size_kb(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_uninstaller_name() -> String {
    "uninstall".to_string()
}

fn default_estimated_size_kb() -> i32 {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// 验证缺省 `uninstall_entry` 时各默认值是否正确。
    fn manifest_defaults_when_entry_missing() {
        let json = r#"{
            "product_name": "测试产品",
            "product_code": "test.product",
            "version": "1.0.0"
        }"#;
        let m: SetupManifest = serde_json::from_str(json).unwrap();
        assert!(m.uninstall_entry.enabled);
        assert!(m.uninstall_entry.uninstall_location.is_none());
        assert_eq!(m.uninstall_entry.uninstaller_name, "uninstall");
        assert_eq!(m.uninstall_entry.estimated_size_kb, -1);
    }

    #[test]
    /// 验证完整 `uninstall_entry` 的 JSON 反序列化是否正确。
    fn manifest_full_entry_roundtrip() {
        let json = r#"{
            "product_name": "测试产品",
            "product_code": "test.product",
            "version": "1.0.0",
            "uninstall_entry": {
                "enabled": true,
                "uninstall_location": "C:\\Program Files\\Test",
                "vendor": "测试发行方",
                "version": "1.0.0",
                "help_link": "https://example.invalid/help",
                "uninstaller_name": "remove",
                "estimated_size_kb": 40960
            }
        }"#;
        let m: SetupManifest = serde_json::from_str(json).unwrap();
        let entry = &m.uninstall_entry;
        assert_eq!(entry.uninstall_location.as_deref(), Some(r"C:\Program Files\Test"));
        assert_eq!(entry.vendor.as_deref(), Some("测试发行方"));
        assert_eq!(entry.uninstaller_name, "remove");
        assert_eq!(entry.estimated_size_kb, 40960);
    }
}
