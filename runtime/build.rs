use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let target = env::var("TARGET").unwrap();
    if !target.starts_with("riscv32im-") && !target.starts_with("riscv32imac-") {
        return;
    }

    let script_path = "linker-scripts/default.x";
    println!("cargo:rerun-if-changed={script_path}");
    let script_bytes = fs::read(script_path).unwrap();

    // Put the linker script somewhere the linker can find it
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("link.x"), script_bytes).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
}
