use std::fs::File;

use serde_json::Value;

use crate::error::ConfigError;

/// Which decision procedure to run. Grounded on `data_structures::SolverType`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Engine {
    Resolution,
    Dp,
    Dpll,
    Cdcl,
}

/// The tie-break policy for decision/unit/pure literal selection. Spec.md
/// §9 requires every tie-break to be fixed and documented; `Lowest` (pick
/// the lowest-indexed unassigned variable, per spec.md §4.5) is currently
/// the only implemented policy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LiteralTieBreak {
    Lowest,
}

/// Solver configuration, grounded on `data_structures::Config` /
/// `parse_config::read_config_json`.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    pub engine: Engine,
    pub tie_break: LiteralTieBreak,
    pub restarts_enabled: bool,
    pub restart_base: i32,
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            engine: Engine::Cdcl,
            tie_break: LiteralTieBreak::Lowest,
            restarts_enabled: true,
            restart_base: 64,
            timeout_secs: 30,
        }
    }
}

/// Reads the solver configuration from a `config.json` file, in the same
/// shape the teacher's `parse_config::read_config_json` reads `SolverType`,
/// and other top-level keys from.
pub fn read_config_json(path: &str) -> Result<SolverConfig, ConfigError> {
    let file = File::open(path)?;
    let json: Value = serde_json::from_reader(file)?;

    let engine = json
        .get("Engine")
        .ok_or(ConfigError::MissingKey("Engine"))
        .and_then(read_engine_json)?;

    let restarts_enabled = json
        .get("Restarts")
        .ok_or(ConfigError::MissingKey("Restarts"))
        .and_then(read_bool_json("Restarts"))?;

    let restart_base = json
        .get("RestartBase")
        .ok_or(ConfigError::MissingKey("RestartBase"))
        .and_then(read_i32_json("RestartBase"))?;

    let timeout_secs = json
        .get("TimeoutSeconds")
        .ok_or(ConfigError::MissingKey("TimeoutSeconds"))
        .and_then(read_i32_json("TimeoutSeconds"))? as u64;

    Ok(SolverConfig {
        engine,
        tie_break: LiteralTieBreak::Lowest,
        restarts_enabled,
        restart_base,
        timeout_secs,
    })
}

fn read_engine_json(value: &Value) -> Result<Engine, ConfigError> {
    match value.as_str().map(str::to_lowercase).as_deref() {
        Some("resolution") => Ok(Engine::Resolution),
        Some("dp") => Ok(Engine::Dp),
        Some("dpll") => Ok(Engine::Dpll),
        Some("cdcl") => Ok(Engine::Cdcl),
        _ => Err(ConfigError::WrongType {
            key: "Engine",
            expected: "one of \"resolution\", \"dp\", \"dpll\", \"cdcl\"",
        }),
    }
}

fn read_bool_json(key: &'static str) -> impl Fn(&Value) -> Result<bool, ConfigError> {
    move |value| value.as_bool().ok_or(ConfigError::WrongType { key, expected: "boolean" })
}

fn read_i32_json(key: &'static str) -> impl Fn(&Value) -> Result<i32, ConfigError> {
    move |value| {
        value
            .as_i64()
            .map(|v| v as i32)
            .ok_or(ConfigError::WrongType { key, expected: "integer" })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_valid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Engine": "cdcl", "Restarts": true, "RestartBase": 64, "TimeoutSeconds": 30}}"#
        )
        .unwrap();
        let config = read_config_json(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.engine, Engine::Cdcl);
        assert!(config.restarts_enabled);
        assert_eq!(config.restart_base, 64);
    }

    #[test]
    fn rejects_unknown_engine() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Engine": "bogus", "Restarts": true, "RestartBase": 64, "TimeoutSeconds": 30}}"#
        )
        .unwrap();
        let err = read_config_json(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::WrongType { key: "Engine", .. }));
    }
}
