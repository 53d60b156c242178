//! Build script for velometer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates speedometer.toml at compile time
//! - Generates the `CONFIG` constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use velometer_core::SpeedometerConfig;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate speedometer.toml
fn load_config() -> SpeedometerConfig {
    println!("cargo:rerun-if-changed=speedometer.toml");

    let config_path = Path::new("speedometer.toml");
    let content = fs::read_to_string(config_path).unwrap_or_else(|e| {
        fail(&format!("Failed to read speedometer.toml: {}", e));
    });

    let value: toml::Value = toml::from_str(&content).unwrap_or_else(|e| {
        fail(&format!("Invalid TOML syntax in speedometer.toml:\n{}", e));
    });

    let defaults = SpeedometerConfig::DEFAULT;
    let config = SpeedometerConfig {
        wheel_diameter_in: get_float(&value, "wheel", "diameter_in")
            .unwrap_or(defaults.wheel_diameter_in),
        low_threshold: get_int(&value, "sensor", "low_threshold", u16::MAX as i64)
            .map_or(defaults.low_threshold, |v| v as u16),
        high_threshold: get_int(&value, "sensor", "high_threshold", u16::MAX as i64)
            .map_or(defaults.high_threshold, |v| v as u16),
        samples_per_reading: get_int(&value, "sensor", "samples_per_reading", u8::MAX as i64)
            .map_or(defaults.samples_per_reading, |v| v as u8),
        debounce_ms: get_int(&value, "button", "debounce_ms", i64::MAX)
            .map_or(defaults.debounce_ms, |v| v as u64),
        decimals: get_int(&value, "display", "decimals", 6)
            .map_or(defaults.decimals, |v| v as u8),
    };

    if let Err(e) = config.validate() {
        fail(&format!("Invalid speedometer.toml: {:?}", e));
    }

    println!("cargo:warning=speedometer.toml validated successfully");
    config
}

/// Look up an optional float, accepting integers too
fn get_float(value: &toml::Value, section: &str, key: &str) -> Option<f64> {
    let entry = value.get(section)?.get(key)?;
    match entry {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        _ => fail(&format!("[{}] {} must be a number", section, key)),
    }
}

/// Look up an optional non-negative integer no larger than `max`
fn get_int(value: &toml::Value, section: &str, key: &str, max: i64) -> Option<i64> {
    let entry = value.get(section)?.get(key)?;
    match entry.as_integer() {
        Some(i) if (0..=max).contains(&i) => Some(i),
        Some(i) => fail(&format!("[{}] {} = {} is out of range 0..={}", section, key, i, max)),
        None => fail(&format!("[{}] {} must be an integer", section, key)),
    }
}

/// Write `$OUT_DIR/speedometer_config.rs`
fn generate_config(config: &SpeedometerConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Speedometer configuration generated from speedometer.toml\n\
         pub const CONFIG: SpeedometerConfig = SpeedometerConfig {{\n    \
             wheel_diameter_in: {:?},\n    \
             low_threshold: {},\n    \
             high_threshold: {},\n    \
             samples_per_reading: {},\n    \
             debounce_ms: {},\n    \
             decimals: {},\n\
         }};\n",
        config.wheel_diameter_in,
        config.low_threshold,
        config.high_threshold,
        config.samples_per_reading,
        config.debounce_ms,
        config.decimals,
    );
    fs::write(out_dir.join("speedometer_config.rs"), source).unwrap();
}

fn fail(msg: &str) -> ! {
    panic!("\n\nspeedometer.toml: {}\n", msg);
}
