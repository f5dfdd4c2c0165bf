//! wixgen - WiX installer-descriptor generator.
//!
//! This binary scans a directory of application files and emits a WiX `.wxs`
//! descriptor ready for consumption by the WiX toolchain (candle/light).

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match wixgen::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
