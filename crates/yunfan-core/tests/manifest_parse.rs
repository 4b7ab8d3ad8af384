use std::path::PathBuf;

use yunfan_core::manifest::SetupManifest;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

#[test]
fn parse_real_setup_manifest_json() {
    let manifest_path = repo_root().join("setup-manifest.json");
    let bytes = std::fs::read(&manifest_path)
        .unwrap_or_else(|e| panic!("read {} failed: {e}", manifest_path.display()));
    let manifest: SetupManifest = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("parse {} failed: {e}", manifest_path.display()));

    assert!(!manifest.product_name.trim().is_empty());
    assert!(!manifest.product_code.trim().is_empty());
    assert!(!manifest.version.trim().is_empty());

    let entry = &manifest.uninstall_entry;
    assert!(entry.enabled);
    assert!(
        entry
            .uninstall_location
            .as_deref()
            .is_some_and(|loc| !loc.trim().is_empty()),
        "setup-manifest.json should configure an uninstall location"
    );
    assert!(!entry.uninstaller_name.trim().is_empty());
    assert!(
        entry.estimated_size_kb >= -1,
        "estimated_size_kb must be -1 (unknown) or a real size"
    );
}
