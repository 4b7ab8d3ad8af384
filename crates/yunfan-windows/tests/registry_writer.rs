#![cfg(windows)]

use uuid::Uuid;
use winreg::enums::HKEY_CURRENT_USER;
use winreg::RegKey;

use yunfan_core::registry::{RegistryHive, RegistryWriter};
use yunfan_windows::registry::WindowsRegistry;

#[test]
fn write_read_back_and_delete_hkcu() {
    let (key_path, _guard) = create_test_key();
    let mut registry = WindowsRegistry::new();

    registry
        .set_string_value(RegistryHive::Hkcu, &key_path, "DisplayName", "测试产品 1.0")
        .expect("set string");
    registry
        .set_dword_value(RegistryHive::Hkcu, &key_path, "NoModify", 1)
        .expect("set dword");

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let key = hkcu.open_subkey(&key_path).expect("open subkey");
    let name: String = key.get_value("DisplayName").expect("read string");
    assert_eq!(name, "测试产品 1.0");
    let no_modify: u32 = key.get_value("NoModify").expect("read dword");
    assert_eq!(no_modify, 1);
    drop(key);

    registry
        .delete_key(RegistryHive::Hkcu, &key_path)
        .expect("delete key");
    assert!(hkcu.open_subkey(&key_path).is_err(), "key should be gone");
}

#[test]
fn delete_missing_key_is_idempotent() {
    let (key_path, _guard) = create_test_key();
    let mut registry = WindowsRegistry::new();

    registry
        .delete_key(RegistryHive::Hkcu, &key_path)
        .expect("first delete");
    registry
        .delete_key(RegistryHive::Hkcu, &key_path)
        .expect("second delete");
}

fn create_test_key() -> (String, CleanupKey) {
    let path = format!("Software\\YunFanPlatformTest\\{}", Uuid::new_v4());
    (path.clone(), CleanupKey(path))
}

struct CleanupKey(String);

impl Drop for CleanupKey {
    fn drop(&mut self) {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let _ = hkcu.delete_subkey_all(&self.0);
    }
}
