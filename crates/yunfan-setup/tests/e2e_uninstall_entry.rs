use std::path::{Path, PathBuf};
use std::process::Command;

use uuid::Uuid;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_manifest(root: &Path, product_code: &str) -> PathBuf {
    let manifest_json = format!(
        r#"
{{
  "product_name": "云帆 E2E 测试产品",
  "product_code": "{product_code}",
  "version": "0.0.1",
  "uninstall_entry": {{
    "enabled": true,
    "uninstall_location": "C:\\Program Files\\YunFan E2E",
    "vendor": "云帆软件",
    "version": "0.0.1",
    "help_link": null,
    "uninstaller_name": "uninstall",
    "estimated_size_kb": 2048
  }}
}}
"#
    );
    let manifest_path = root.join("setup-manifest.json");
    std::fs::write(&manifest_path, manifest_json).expect("write manifest");
    manifest_path
}

fn run_setup(manifest: &Path, subcommand: &str) {
    let exe = env!("CARGO_BIN_EXE_yunfan-setup");
    let out = Command::new(exe)
        .arg("--manifest")
        .arg(manifest)
        .arg("--silent")
        .arg(subcommand)
        .output()
        .unwrap_or_else(|e| panic!("run {subcommand} failed: {e}"));
    assert!(
        out.status.success(),
        "{subcommand} failed: status={:?}, stdout={}, stderr={}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[cfg(windows)]
#[test]
fn e2e_install_then_uninstall_registers_and_removes_entry() {
    use winreg::enums::HKEY_CURRENT_USER;
    use winreg::RegKey;

    let product_code = format!("yunfan-e2e-{}", Uuid::new_v4());
    let key_path =
        format!(r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall\{product_code}");
    let _cleanup_key = CleanupKey(key_path.clone());

    let root = unique_temp_dir("yunfan-setup-e2e");
    let _cleanup_dir = CleanupDir(root.clone());
    let manifest_path = write_manifest(&root, &product_code);

    run_setup(&manifest_path, "install");

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let key = hkcu.open_subkey(&key_path).expect("open uninstall entry");
    let display_name: String = key.get_value("DisplayName").expect("DisplayName");
    assert_eq!(display_name, "云帆 E2E 测试产品 0.0.1");
    let uninstall_string: String = key.get_value("UninstallString").expect("UninstallString");
    assert_eq!(uninstall_string, r"C:\Program Files\YunFan E2E\uninstall.exe");
    assert!(!uninstall_string.contains('"'), "must stay unquoted");
    let no_modify: u32 = key.get_value("NoModify").expect("NoModify");
    assert_eq!(no_modify, 1);
    let no_repair: u32 = key.get_value("NoRepair").expect("NoRepair");
    assert_eq!(no_repair, 1);
    let size: u32 = key.get_value("EstimatedSize").expect("EstimatedSize");
    assert_eq!(size, 2048);
    assert!(
        key.get_value::<String, _>("HelpLink").is_err(),
        "HelpLink must not be written when absent"
    );
    drop(key);

    run_setup(&manifest_path, "uninstall");
    assert!(
        hkcu.open_subkey(&key_path).is_err(),
        "uninstall entry should be removed"
    );

    // 再次卸载应同样成功（幂等）
    run_setup(&manifest_path, "uninstall");
}

#[cfg(not(windows))]
#[test]
fn e2e_non_windows_run_is_a_clean_no_op() {
    let product_code = format!("yunfan-e2e-{}", Uuid::new_v4());
    let root = unique_temp_dir("yunfan-setup-e2e");
    let _cleanup_dir = CleanupDir(root.clone());
    let manifest_path = write_manifest(&root, &product_code);

    // 平台门禁使两个阶段都为空操作，进程以成功退出
    run_setup(&manifest_path, "install");
    run_setup(&manifest_path, "uninstall");
}

#[cfg(windows)]
struct CleanupKey(String);

#[cfg(windows)]
impl Drop for CleanupKey {
    fn drop(&mut self) {
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let _ = hkcu.delete_subkey_all(&self.0);
    }
}

struct CleanupDir(PathBuf);

impl Drop for CleanupDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}
