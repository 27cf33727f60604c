use std::env;
use std::path::Path;

use mentara_questionnaires::ScreeningConfig;

/// Optional path to a JSON screening config replacing the built-in tables.
pub const SCREENING_CONFIG_VAR: &str = "MENTARA_SCREENING_CONFIG";

pub fn load_screening_config() -> eyre::Result<ScreeningConfig> {
    match env::var(SCREENING_CONFIG_VAR) {
        Ok(path) => load_from_path(Path::new(&path)),
        Err(_) => {
            tracing::info!("no screening config override, using built-in tables");
            let config = ScreeningConfig::builtin();
            config.validate()?;
            Ok(config)
        }
    }
}

pub fn load_from_path(path: &Path) -> eyre::Result<ScreeningConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read screening config at {}: {e}", path.display()))?;
    let config = ScreeningConfig::from_json(&contents)?;
    tracing::info!(
        path = %path.display(),
        questionnaires = config.layout.entries.len(),
        "loaded screening config"
    );
    Ok(config)
}
