//! 注册表写入端口的 Windows 实现（winreg）。
//!
//! 说明：
//! - Windows 上通过 winreg 执行真实读写；其他平台提供桩实现
//! - 平台门禁会让动作在非 Windows 平台直接跳过，正常流程不会触达桩实现
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

use yunfan_core::registry::{RegistryError, RegistryHive, RegistryWriter};

/// 平台中立的注册表写入器别名。
#[cfg(windows)]
pub type PlatformRegistry = WindowsRegistry;
#[cfg(not(windows))]
pub type PlatformRegistry = UnsupportedRegistry;

/// Windows 注册表写入器。
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct WindowsRegistry;

#[cfg(windows)]
impl WindowsRegistry {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
mod windows_impl {
    use std::io;

    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
    use winreg::RegKey;

    use super::*;

    fn root(hive: RegistryHive) -> RegKey {
        match hive {
            RegistryHive::Hklm => RegKey::predef(HKEY_LOCAL_MACHINE),
            RegistryHive::Hkcu => RegKey::predef(HKEY_CURRENT_USER),
        }
    }

    /// 打开目标子键，不存在时创建。
    fn open_or_create(hive: RegistryHive, key: &str) -> Result<RegKey, RegistryError> {
        let (subkey, _disp) = root(hive)
            .create_subkey(key)
            .map_err(|source| RegistryError::OpenKey {
                key: key.to_string(),
                source,
            })?;
        Ok(subkey)
    }

    impl RegistryWriter for WindowsRegistry {
        fn set_string_value(
            &mut self,
            hive: RegistryHive,
            key: &str,
            name: &str,
            value: &str,
        ) -> Result<(), RegistryError> {
            let subkey = open_or_create(hive, key)?;
            subkey
                .set_value(name, &value)
                .map_err(|source| RegistryError::SetValue {
                    key: key.to_string(),
                    name: name.to_string(),
                    source,
                })
        }

        fn set_dword_value(
            &mut self,
            hive: RegistryHive,
            key: &str,
            name: &str,
            value: u32,
        ) -> Result<(), RegistryError> {
            let subkey = open_or_create(hive, key)?;
            subkey
                .set_value(name, &value)
                .map_err(|source| RegistryError::SetValue {
                    key: key.to_string(),
                    name: name.to_string(),
                    source,
                })
        }

        fn delete_key(&mut self, hive: RegistryHive, key: &str) -> Result<(), RegistryError> {
            match root(hive).delete_subkey_all(key) {
                Ok(()) => Ok(()),
                // 子键不存在视为已删除（幂等）；其余 IO 失败原样上抛
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("注册表键不存在，视为已删除: {key}");
                    Ok(())
                }
                Err(source) => Err(RegistryError::DeleteKey {
                    key: key.to_string(),
                    source,
                }),
            }
        }
    }
}

/// 非 Windows 平台桩实现：所有操作返回不支持错误。
#[cfg(not(windows))]
#[derive(Debug, Default)]
pub struct UnsupportedRegistry;

#[cfg(not(windows))]
impl UnsupportedRegistry {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl RegistryWriter for UnsupportedRegistry {
    fn set_string_value(
        &mut self,
        _hive: RegistryHive,
        _key: &str,
        _name: &str,
        _value: &str,
    ) -> Result<(), RegistryError> {
        tracing::warn!("非 Windows 平台调用注册表写入");
        Err(RegistryError::Unsupported)
    }

    fn set_dword_value(
        &mut self,
        _hive: RegistryHive,
        _key: &str,
        _name: &str,
        _value: u32,
    ) -> Result<(), RegistryError> {
        tracing::warn!("非 Windows 平台调用注册表写入");
        Err(RegistryError::Unsupported)
    }

    fn delete_key(&mut self, _hive: RegistryHive, _key: &str) -> Result<(), RegistryError> {
        tracing::warn!("非 Windows 平台调用注册表删除");
        Err(RegistryError::Unsupported)
    }
}
