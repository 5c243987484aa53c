use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Linker setup is only needed for the RP2350 firmware target;
    // host builds (tests, mock feature) skip it
    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumbv8m") {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    // Put memory.x where the linker can find it
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).expect("write memory.x");
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // defmt log level (default: info)
    if let Ok(level) = env::var("DEFMT_LOG") {
        println!("cargo:warning=Using DEFMT_LOG from environment: {}", level);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-env-changed=DEFMT_LOG");
}
