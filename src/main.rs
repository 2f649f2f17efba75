// src/main.rs

use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;

use math_utils::config::selftest_config::SelfTestConfig;
use math_utils::selftest;

fn main() -> ExitCode {
    let config = SelfTestConfig::load().unwrap_or_else(|e| {
        eprintln!("config error ({}), using defaults", e);
        SelfTestConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("MATHUTILS_LOG", config.log_level.as_str())
        .write_style_or("MATHUTILS_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    info!(
        "running self-test (factor sweep to {}, bit-string sweep to {})",
        config.sweep.factor_max, config.sweep.bit_string_max
    );
    let report = selftest::run(&config);

    if let Some(path) = &config.report_path {
        match report.save_to_file(path) {
            Ok(_) => info!("report saved to {}", path),
            Err(e) => error!("could not save report to {}: {}", path, e),
        }
    }

    if report.all_passed() {
        info!("all suites passed");
        ExitCode::SUCCESS
    } else {
        error!("self-test failed");
        ExitCode::FAILURE
    }
}
