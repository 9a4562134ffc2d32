//! Runtime configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;

/// When to colorize the console summary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ColorMode {
    Always,
    Never,
    /// Color unless `NO_COLOR` is set.
    #[default]
    Auto,
}

impl ColorMode {
    /// Parse `always` / `never` / `auto`; anything else falls back to `Auto`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "always" | "1" | "true" => ColorMode::Always,
            "never" | "0" | "false" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }

    /// Resolve the mode against the environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Snapshot of configuration values consumed by the crate.
#[derive(Clone, Debug)]
pub struct AppCfg {
    pub report_root: PathBuf,
    pub color: ColorMode,
    pub log_level: u8,
    pub emit_on_priming_call: bool,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            report_root: PathBuf::from("."),
            color: ColorMode::Auto,
            log_level: 1,
            emit_on_priming_call: false,
        }
    }
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let report_root = lookup("TKCMP_REPORT_ROOT")
            .or_else(|| lookup("HOME"))
            .map(PathBuf::from)
            .unwrap_or(defaults.report_root);

        Self {
            report_root,
            color: lookup("TKCMP_COLOR")
                .map(|raw| ColorMode::parse(&raw))
                .unwrap_or(defaults.color),
            log_level: lookup("TKCMP_LOG_LEVEL")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            emit_on_priming_call: lookup("TKCMP_EMIT_ON_PRIMING")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(defaults.emit_on_priming_call),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = AppCfg::from_lookup(|_| None);
        assert_eq!(cfg.report_root, PathBuf::from("."));
        assert_eq!(cfg.color, ColorMode::Auto);
        assert_eq!(cfg.log_level, 1);
        assert!(!cfg.emit_on_priming_call);
    }

    #[test]
    fn report_root_falls_back_to_home() {
        let cfg = AppCfg::from_lookup(lookup_from(&[("HOME", "/home/tk")]));
        assert_eq!(cfg.report_root, PathBuf::from("/home/tk"));

        let cfg = AppCfg::from_lookup(lookup_from(&[
            ("HOME", "/home/tk"),
            ("TKCMP_REPORT_ROOT", "/var/reports"),
        ]));
        assert_eq!(cfg.report_root, PathBuf::from("/var/reports"));
    }

    #[test]
    fn parses_overrides() {
        let cfg = AppCfg::from_lookup(lookup_from(&[
            ("TKCMP_COLOR", "never"),
            ("TKCMP_LOG_LEVEL", "2"),
            ("TKCMP_EMIT_ON_PRIMING", "yes"),
        ]));
        assert_eq!(cfg.color, ColorMode::Never);
        assert_eq!(cfg.log_level, 2);
        assert!(cfg.emit_on_priming_call);
    }

    #[test]
    fn bad_log_level_keeps_default() {
        let cfg = AppCfg::from_lookup(lookup_from(&[("TKCMP_LOG_LEVEL", "loud")]));
        assert_eq!(cfg.log_level, 1);
    }

    #[test]
    fn explicit_modes_ignore_environment() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
        assert_eq!(ColorMode::parse("ALWAYS"), ColorMode::Always);
        assert_eq!(ColorMode::parse("whatever"), ColorMode::Auto);
    }
}
