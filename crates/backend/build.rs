use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Copies the workspace config.toml next to the compiled binary so the
// server finds it with the exe-relative lookup in shared::config.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf);
    let Some(workspace_root) = workspace_root else {
        return;
    };

    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source
        );
        return;
    }

    match profile_dir() {
        Some(dir) => {
            let dest = dir.join("config.toml");
            if let Err(e) = fs::copy(&source, &dest) {
                println!("cargo:warning=Failed to copy config.toml: {}", e);
            }
        }
        None => println!("cargo:warning=Could not locate the target profile directory"),
    }
}

// OUT_DIR is target/<profile>/build/backend-*/out; walk up to target/<profile>.
fn profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
