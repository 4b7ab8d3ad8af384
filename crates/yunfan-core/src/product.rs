//! 产品信息模型。
//!
//! 说明：
//! - `product_code` 是产品的稳定标识，注册表键路径等系统落点以它为准
//! - 本模块仅定义数据结构，不执行任何 IO/系统修改
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

/// 安装产品信息。
///
/// 字段说明：
/// - `product_code`：产品标识（稳定、唯一；跨安装/卸载保持一致）
/// - `product_name`：产品显示名称
/// - `version`：版本号（用于展示/审计）
#[derive(Debug, Clone)]
pub struct InstallProduct {
    pub product_code: String,
    pub product_name: String,
    pub version: String,
}

impl InstallProduct {
    /// 构造产品信息。
    pub fn new(
        product_code: impl Into<String>,
        product_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            product_name: product_name.into(),
            version: version.into(),
        }
    }

    /// 控制面板“卸载或更改程序”列表中使用的显示名称。
    ///
    /// 返回值：
    /// - `"<产品名> <版本>"`
    pub fn uninstall_display_name(&self) -> String {
        format!("{} {}", self.product_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// 验证卸载显示名称的拼接格式。
    fn uninstall_display_name_joins_name_and_version() {
        let p = InstallProduct::new("acme.tool", "Acme Tool", "3.2");
        assert_eq!(p.uninstall_display_name(), "Acme Tool 3.2");
    }
}
