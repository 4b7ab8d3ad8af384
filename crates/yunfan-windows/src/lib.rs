//! Windows 平台能力封装（注册表）。
//!
//! 目标：
//! - 将 winreg 细节集中封装，上层业务代码只依赖 yunfan-core 的端口接口
//! - 统一错误处理风格（以端口定义的错误类型向上返回）
//!
//! 权限要求：
//! - 卸载注册写入 HKCU，常规用户权限即可；写 HKLM 需要管理员权限
//!
//! 作者：云帆协同平台项目组（自动生成）
//! 创建时间：2026-08-07
//! 修改时间：2026-08-07

pub mod registry;
