use std::path::{Path, PathBuf};

/// `target/<profile>` for the current build, found from `OUT_DIR`
fn profile_dir() -> Option<PathBuf> {
    let out_dir = std::env::var("OUT_DIR").ok()?;
    let profile = std::env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    // The server reads config.toml from next to its executable
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml in the workspace root, the embedded default is used");
        return;
    }

    let Some(target) = profile_dir() else {
        println!("cargo:warning=could not locate the target profile directory");
        return;
    };
    let dest = target.join("config.toml");
    if let Err(e) = std::fs::copy(&source, &dest) {
        panic!("failed to copy config.toml to {}: {e}", dest.display());
    }
}
