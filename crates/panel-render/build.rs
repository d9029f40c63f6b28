use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 inverse transfer: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb < 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value. `{:?}` prints the shortest literal
    // that parses back to the identical f64.
    writeln!(file, "/// Lookup table for sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: linear value").unwrap();
    writeln!(file, "pub static SRGB_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256u32 {
        let linear = srgb_to_linear_exact(i as f64 / 255.0);
        writeln!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
