//! 控制面板“卸载或更改程序”注册动作。
//!
//! 职责：
//! - 安装阶段：在 HKCU 卸载命名空间下写入产品展示信息与卸载命令
//! - 卸载阶段：删除整个注册键
//!
//! 适用范围：
//! - 仅 Windows 家族平台（与架构无关）；其他平台该动作为空操作
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::action::{ActionContext, InstallAction, InstallMode};
use crate::error::InstallError;
use crate::manifest::UninstallEntryManifest;
use crate::platform::{PlatformDescriptor, EXTENSION_EXE};
use crate::product::InstallProduct;
use crate::progress::ProgressScope;
use crate::registry::{RegistryHive, RegistryWriter};

/// 动作标识。
const ACTION_ID: &str = "uninstall-entry";

/// HKCU 下按用户的卸载注册命名空间（子键为产品标识）。
const UNINSTALL_KEY_PREFIX: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall";

/// “未统计安装大小”哨兵值（既有安装记录的外部兼容契约）。
pub const UNKNOWN_SIZE_KB: i32 = -1;

/// 失败上报使用的固定上下文消息。
pub const MSG_UNINSTALL_ENTRY_FAILED: &str = "添加/删除卸载注册信息失败";

/// 进度标签与固定总工作量（条件步骤跳过时不缩减总量，保持界面一致）。
const LABEL_CREATE: &str = "正在创建卸载注册信息";
const LABEL_REMOVE: &str = "正在移除卸载注册信息";
const CREATE_TOTAL_UNITS: u32 = 10;
const REMOVE_TOTAL_UNITS: u32 = 1;

/// InstallDate 的展示格式：星期全称 月份全称 日 时:分:秒 UTC偏移 年。
const INSTALL_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:long] [month repr:long] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute] [year]"
);

/// 控制面板卸载注册动作。
///
/// 字段说明：
/// - `uninstall_location`：卸载器所在目录（Windows 路径形式）；为空时安装阶段不注册
/// - `vendor` / `version` / `help_link`：可选展示字段，相互独立，缺一不影响其余写入
/// - `uninstaller_name`：卸载器可执行文件基础名（不含扩展名）
/// - `size_kb`：安装大小（KB）；[`UNKNOWN_SIZE_KB`] 表示未统计，不写入
///
/// 生命周期：
/// - 配置在构建动作列表时创建，此后只读；注册键在安装阶段创建、卸载阶段整体删除
#[derive(Debug, Clone)]
pub struct UninstallEntryAction {
    uninstall_location: Option<String>,
    vendor: Option<String>,
    version: Option<String>,
    help_link: Option<String>,
    uninstaller_name: String,
    size_kb: i32,
}

impl UninstallEntryAction {
    /// 构造动作配置。
    pub fn new(
        uninstall_location: Option<String>,
        vendor: Option<String>,
        version: Option<String>,
        help_link: Option<String>,
        uninstaller_name: impl Into<String>,
        size_kb: i32,
    ) -> Self {
        Self {
            uninstall_location,
            vendor,
            version,
            help_link,
            uninstaller_name: uninstaller_name.into(),
            size_kb,
        }
    }

    /// 从清单配置构造动作。
    pub fn from_manifest(manifest: &UninstallEntryManifest) -> Self {
        Self::new(
            manifest.uninstall_location.clone(),
            manifest.vendor.clone(),
            manifest.version.clone(),
            manifest.help_link.clone(),
            manifest.uninstaller_name.clone(),
            manifest.estimated_size_kb,
        )
    }

    /// 计算产品的卸载注册键路径（HKCU 下，不含根键）。
    ///
    /// 说明：
    /// - 同一产品标识在安装与卸载阶段得到相同路径；不同产品互不共享
    pub fn uninstall_key(product_code: &str) -> String {
        format!(r"{UNINSTALL_KEY_PREFIX}\{product_code}")
    }

    /// 拼接卸载器的完整调用路径。
    ///
    /// 说明：
    /// - 注册表中的路径始终是 Windows 形式，与构建宿主无关，
    ///   因此这里做字符串拼接而不经过 `std::path`
    fn uninstaller_command(&self, location: &str) -> String {
        let sep = if location.ends_with('\\') || location.ends_with('/') {
            ""
        } else {
            "\\"
        };
        format!("{location}{sep}{}.{EXTENSION_EXE}", self.uninstaller_name)
    }

    /// 安装分支：按固定顺序写入注册信息。
    ///
    /// 写入顺序：展示字段在前、行为字段居中、可选字段最后；
    /// 中途失败时已写入的必选展示字段得以保留（注册并非事务性）。
    fn register(
        &self,
        product: &InstallProduct,
        key: &str,
        registry: &mut dyn RegistryWriter,
        scope: &mut ProgressScope<'_>,
    ) -> Result<(), InstallError> {
        // 未配置卸载目录：没有落点，无从注册
        let Some(location) = self.uninstall_location.as_deref() else {
            return Ok(());
        };

        scope.begin(LABEL_CREATE, CREATE_TOTAL_UNITS);
        scope.set_label(LABEL_CREATE);

        let command = self.uninstaller_command(location);
        let hive = RegistryHive::Hkcu;

        // 各字段含义见微软 Uninstall 注册表约定
        registry.set_string_value(hive, key, "DisplayName", &product.uninstall_display_name())?;
        scope.advance(1);
        // 以卸载器自身作为图标来源
        registry.set_string_value(hive, key, "DisplayIcon", &command)?;
        scope.advance(1);
        registry.set_string_value(hive, key, "InstallDate", &install_date_now())?;
        scope.advance(1);
        registry.set_string_value(hive, key, "InstallLocation", location)?;
        scope.advance(1);
        // 注意：UninstallString 不能加引号，否则 Windows 卸载界面
        // 会在调用卸载器时报权限不足
        registry.set_string_value(hive, key, "UninstallString", &command)?;
        scope.advance(1);
        // 不支持“更改”
        registry.set_dword_value(hive, key, "NoModify", 1)?;
        scope.advance(1);
        // 不支持“修复”
        registry.set_dword_value(hive, key, "NoRepair", 1)?;
        scope.advance(1);
        if let Some(vendor) = self.vendor.as_deref() {
            registry.set_string_value(hive, key, "Publisher", vendor)?;
        }
        scope.advance(1);
        if let Some(version) = self.version.as_deref() {
            registry.set_string_value(hive, key, "DisplayVersion", version)?;
        }
        scope.advance(1);
        if let Some(help_link) = self.help_link.as_deref() {
            registry.set_string_value(hive, key, "HelpLink", help_link)?;
        }
        if self.size_kb != UNKNOWN_SIZE_KB {
            registry.set_dword_value(hive, key, "EstimatedSize", self.size_kb as u32)?;
        }
        scope.advance(1);

        Ok(())
    }

    /// 卸载分支：整体删除注册键。
    fn remove(
        key: &str,
        registry: &mut dyn RegistryWriter,
        scope: &mut ProgressScope<'_>,
    ) -> Result<(), InstallError> {
        scope.begin(LABEL_REMOVE, REMOVE_TOTAL_UNITS);
        scope.set_label(LABEL_REMOVE);
        registry.delete_key(RegistryHive::Hkcu, key)?;
        scope.advance(1);
        Ok(())
    }
}

impl InstallAction for UninstallEntryAction {
    fn id(&self) -> &str {
        ACTION_ID
    }

    fn is_supported(&self, platform: &PlatformDescriptor) -> bool {
        // 仅 Windows 家族提供控制面板卸载注册，与架构无关
        platform.is_windows()
    }

    fn run(&self, ctx: &mut ActionContext<'_>, mode: InstallMode) -> Result<(), InstallError> {
        if !self.is_supported(ctx.platform) {
            return Ok(());
        }

        let key = Self::uninstall_key(&ctx.product.product_code);
        let mut scope = ProgressScope::enter(&mut *ctx.progress);

        let outcome = match mode {
            InstallMode::Install => {
                self.register(ctx.product, &key, &mut *ctx.registry, &mut scope)
            }
            InstallMode::Uninstall => Self::remove(&key, &mut *ctx.registry, &mut scope),
        };

        if let Err(err) = outcome {
            ctx.reporter.fatal(MSG_UNINSTALL_ENTRY_FAILED, &err);
            return Err(err.with_context(MSG_UNINSTALL_ENTRY_FAILED));
        }
        Ok(())
    }
}

/// 渲染当前时间的 InstallDate 字段值。
///
/// 返回值：
/// - 本地时区偏移不可确定时回退为 UTC 时间
fn install_date_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_install_date(now)
}

/// 渲染 InstallDate 字段值（纯函数，便于测试）。
///
/// 返回值：
/// - 形如 `Friday August 07 09:05:03 +08:00 2026`
pub fn format_install_date(moment: OffsetDateTime) -> String {
    moment
        .format(INSTALL_DATE_FORMAT)
        .unwrap_or_else(|_| moment.to_string())
}
