#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_radix(&outdir_path, "default_radix.rs")?;
    Ok(())
}

/// Create default_radix.rs, containg definition of constant DEFAULT_RADIX
fn write_default_radix(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_radix = env::var("RUST_SEGNUM_DEFAULT_RADIX")
        .map(|s| s.parse::<u32>().expect("$RUST_SEGNUM_DEFAULT_RADIX must be an integer"))
        .unwrap_or(10u32);

    assert!(
        (2..=36).contains(&default_radix),
        "$RUST_SEGNUM_DEFAULT_RADIX must be between 2 and 36 (got {default_radix})"
    );

    let default_radix_rs_path = outdir_path.join(filename);

    let default_radix_rs = format!(
        "/// Radix used by `DigitWord` when none is given, and by `Display`\n\
         pub const DEFAULT_RADIX: u32 = {default_radix};"
    );

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_radix_rs_path) {
        Ok(existing_contents) if existing_contents == default_radix_rs => {},
        _ => {
            let mut out = File::create(&default_radix_rs_path)
                .expect("Could not create default_radix.rs");
            write!(out, "{default_radix_rs}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_radix_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_SEGNUM_DEFAULT_RADIX");
    println!("cargo:rustc-check-cfg=cfg(property_tests)");

    Ok(())
}
