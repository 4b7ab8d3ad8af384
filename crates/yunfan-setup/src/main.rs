//! 云帆协同平台统一安装程序（setup）。
//!
//! 职责：
//! - 读取 `setup-manifest.json`，构建产品信息与动作列表
//! - 按生命周期模式（安装/卸载）串行执行动作并上报进度
//! - 动作失败时写入日志并以错误退出，交由上层部署流程决定整体行为
//!
//! 权限要求：
//! - 卸载注册写入 HKCU，常规用户权限即可；无需管理员
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use yunfan_core::action::uninstall_entry::UninstallEntryAction;
use yunfan_core::action::{ActionContext, InstallAction, InstallMode};
use yunfan_core::error::InstallError;
use yunfan_core::manifest::SetupManifest;
use yunfan_core::platform::PlatformDescriptor;
use yunfan_core::product::InstallProduct;
use yunfan_core::progress::{NullProgress, ProgressMonitor};
use yunfan_core::report::FailureSink;
use yunfan_windows::registry::PlatformRegistry;

/// 命令行参数。
///
/// 说明：
/// - `manifest` 指向安装清单文件（默认 `setup-manifest.json`）
/// - `silent` 用于企业部署场景（关闭进度条输出）
#[derive(Debug, Parser)]
#[command(name = "yunfan-setup", version)]
struct Cli {
    #[arg(long, default_value = "setup-manifest.json")]
    manifest: PathBuf,

    #[arg(long, default_value_t = false)]
    silent: bool,

    #[command(subcommand)]
    command: Commands,
}

/// setup 支持的子命令。
#[derive(Debug, Subcommand)]
enum Commands {
    /// 安装（注册系统元数据）。
    Install,
    /// 卸载（移除系统元数据；重复执行视为成功）。
    Uninstall,
}

/// 程序入口：解析参数并分发子命令。
///
/// 异常处理：
/// - 任意子命令执行失败会返回 `Err` 并输出日志（由调用方/控制台显示）。
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mode = match cli.command {
        Commands::Install => InstallMode::Install,
        Commands::Uninstall => InstallMode::Uninstall,
    };
    run_pipeline(&cli, mode)
}

/// 读取并解析安装清单（JSON）。
///
/// 参数：
/// - `path`：清单文件路径
///
/// 异常处理：
/// - 文件读取失败（不存在/权限/IO）返回错误
/// - JSON 解析失败返回错误
fn load_manifest(path: &Path) -> Result<SetupManifest> {
    let bytes = std::fs::read(path).with_context(|| format!("读取清单失败: {}", path.display()))?;
    let manifest: SetupManifest = serde_json::from_slice(&bytes).context("解析清单 JSON 失败")?;
    Ok(manifest)
}

/// 按清单构建动作列表。
///
/// 说明：
/// - 动作顺序即执行顺序；后续新增动作按需在此追加
fn build_actions(manifest: &SetupManifest) -> Vec<Box<dyn InstallAction>> {
    let mut actions: Vec<Box<dyn InstallAction>> = Vec::new();
    if manifest.uninstall_entry.enabled {
        actions.push(Box::new(UninstallEntryAction::from_manifest(
            &manifest.uninstall_entry,
        )));
    }
    actions
}

/// 执行安装/卸载流程（按清单编排）。
///
/// 参数：
/// - `cli`：命令行参数（包含 manifest 路径、silent 标志）
/// - `mode`：本次执行的生命周期模式
///
/// 主要步骤：
/// 1) 加载清单并构建产品信息
/// 2) 探测当前平台并构建动作列表
/// 3) 按顺序执行动作；不适用当前平台的动作跳过
///
/// 异常处理：
/// - 任一动作执行失败将终止流程并返回错误；上层可据此中止批量部署。
fn run_pipeline(cli: &Cli, mode: InstallMode) -> Result<()> {
    let manifest = load_manifest(&cli.manifest)?;
    let product = InstallProduct::new(
        manifest.product_code.clone(),
        manifest.product_name.clone(),
        manifest.version.clone(),
    );
    let platform = PlatformDescriptor::current();

    match mode {
        InstallMode::Install => info!("开始安装: {} {}", manifest.product_name, manifest.version),
        InstallMode::Uninstall => {
            info!("开始卸载: {} {}", manifest.product_name, manifest.version)
        }
    }

    let mut registry = PlatformRegistry::new();
    let mut progress: Box<dyn ProgressMonitor> = if cli.silent {
        Box::new(NullProgress)
    } else {
        Box::new(BarProgress::new())
    };
    let reporter = LogFailureSink;

    for action in build_actions(&manifest) {
        if !action.is_supported(&platform) {
            info!("动作不适用于当前平台，跳过: {}", action.id());
            continue;
        }
        let mut ctx = ActionContext {
            product: &product,
            platform: &platform,
            registry: &mut registry,
            progress: progress.as_mut(),
            reporter: &reporter,
        };
        action
            .run(&mut ctx, mode)
            .with_context(|| format!("动作执行失败: {}", action.id()))?;
    }

    match mode {
        InstallMode::Install => info!("安装完成"),
        InstallMode::Uninstall => info!("卸载完成"),
    }
    Ok(())
}

/// 进度条样式模板。
const PB_STYLE: &str = "{spinner:.blue} {msg} [{wide_bar:.cyan/blue}] {pos}/{len}";

/// indicatif 进度条监视器。
///
/// 说明：
/// - `begin` 之前的 `advance`/`set_label` 调用会被忽略（尚无进度条可用）
struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    fn new() -> Self {
        Self { bar: None }
    }
}

impl ProgressMonitor for BarProgress {
    fn begin(&mut self, label: &str, total_units: u32) {
        let bar = ProgressBar::new(u64::from(total_units));
        if let Ok(style) = ProgressStyle::with_template(PB_STYLE) {
            bar.set_style(style);
        }
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn set_label(&mut self, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(label.to_string());
        }
    }

    fn advance(&mut self, units: u32) {
        if let Some(bar) = &self.bar {
            bar.inc(u64::from(units));
        }
    }

    fn close(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// 基于日志的致命失败上报器。
struct LogFailureSink;

impl FailureSink for LogFailureSink {
    fn fatal(&self, context: &str, error: &InstallError) {
        error!("{context}: {error}");
    }
}
