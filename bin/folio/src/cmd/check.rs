//! Check command - validate configuration

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::Config;

use super::load_config;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, api_key: Option<&str>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    if !config_path.exists() {
        result.add_warning(format!(
            "{} not found, using defaults and FOLIO__* environment",
            config_path.display()
        ));
    }

    match load_config(config_path, api_key) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            check_config_values(&config, &mut result);
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            result.add_error(format!("Configuration error: {e}"));
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    for warning in config.warnings() {
        result.add_warning(warning);
    }

    if let Some(dir) = config
        .server
        .site_dir
        .as_deref()
        .filter(|d| !Path::new(d).is_dir())
    {
        result.add_warning(format!("server.site_dir '{dir}' does not exist"));
    }

    if config.server.addr.parse::<std::net::SocketAddr>().is_err() {
        result.add_warning(format!(
            "server.addr '{}' is not an IP:port pair; it will be resolved at startup",
            config.server.addr
        ));
    }
}
