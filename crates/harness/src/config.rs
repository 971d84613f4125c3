//! Run configuration.
//!
//! Defaults come from compile-time constants, environment variables override
//! the defaults, and command-line arguments override both.

use anyhow::{anyhow, Result};

use crate::core::Strategy;
use crate::engine::Layout;
use crate::types::{FRAMES_PER_RUN, SWEEPS_PER_RUN};

/// Which workloads to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Entities,
    Grid,
    All,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entities" => Some(Mode::Entities),
            "grid" => Some(Mode::Grid),
            "all" => Some(Mode::All),
            _ => None,
        }
    }

    pub fn runs_entities(self) -> bool {
        matches!(self, Mode::Entities | Mode::All)
    }

    pub fn runs_grid(self) -> bool {
        matches!(self, Mode::Grid | Mode::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// `None` runs every layout
    pub layout: Option<Layout>,
    /// `None` runs every strategy
    pub strategy: Option<Strategy>,
    pub frames: u32,
    pub sweeps: u32,
    /// Clock tick length in nanoseconds
    pub tick_ns: u64,
    /// Animate the entity run on the terminal after measuring
    pub watch: bool,
    /// Print the final screen as text
    pub dump: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::All,
            layout: None,
            strategy: None,
            frames: FRAMES_PER_RUN,
            sweeps: SWEEPS_PER_RUN,
            tick_ns: 1_000,
            watch: false,
            dump: false,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `TILE_SIM_FRAMES`, `TILE_SIM_SWEEPS` and
    /// `TILE_SIM_TICK_NS`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            frames: var("TILE_SIM_FRAMES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.frames),
            sweeps: var("TILE_SIM_SWEEPS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.sweeps),
            tick_ns: var("TILE_SIM_TICK_NS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&ns: &u64| ns > 0)
                .unwrap_or(defaults.tick_ns),
            ..defaults
        }
    }

    /// Apply command-line arguments (without the program name) on top of `self`.
    ///
    /// ```text
    /// [entities|grid|all] [--frames N] [--sweeps N] [--tick-ns N]
    ///                     [--layout soa|cursor|aos|all] [--strategy a|b|c|all]
    ///                     [--watch] [--dump]
    /// ```
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        if let Some(mode) = args.first().and_then(|a| Mode::parse(a)) {
            self.mode = mode;
            i = 1;
        }

        while i < args.len() {
            match args[i].as_str() {
                "--frames" => {
                    i += 1;
                    self.frames = parse_number(args, i, "--frames")?;
                }
                "--sweeps" => {
                    i += 1;
                    self.sweeps = parse_number(args, i, "--sweeps")?;
                }
                "--tick-ns" => {
                    i += 1;
                    self.tick_ns = parse_number(args, i, "--tick-ns")?;
                    if self.tick_ns == 0 {
                        return Err(anyhow!("--tick-ns must be positive"));
                    }
                }
                "--layout" => {
                    i += 1;
                    let v = value(args, i, "--layout")?;
                    self.layout = if v == "all" {
                        None
                    } else {
                        Some(
                            Layout::parse(v)
                                .ok_or_else(|| anyhow!("invalid --layout value: {}", v))?,
                        )
                    };
                }
                "--strategy" => {
                    i += 1;
                    let v = value(args, i, "--strategy")?;
                    self.strategy = if v == "all" {
                        None
                    } else {
                        Some(
                            Strategy::parse(v)
                                .ok_or_else(|| anyhow!("invalid --strategy value: {}", v))?,
                        )
                    };
                }
                "--watch" => self.watch = true,
                "--dump" => self.dump = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(self)
    }

    pub fn layouts(&self) -> Vec<Layout> {
        match self.layout {
            Some(layout) => vec![layout],
            None => Layout::ALL.to_vec(),
        }
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            Some(strategy) => vec![strategy],
            None => Strategy::ALL.to_vec(),
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_constants() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.frames, 100);
        assert_eq!(cfg.sweeps, 100);
        assert_eq!(cfg.mode, Mode::All);
        assert_eq!(cfg.layouts().len(), 3);
        assert_eq!(cfg.strategies().len(), 3);
    }

    #[test]
    fn env_overrides_defaults_and_ignores_garbage() {
        let cfg = RunConfig::from_vars(|key| match key {
            "TILE_SIM_FRAMES" => Some("250".to_string()),
            "TILE_SIM_SWEEPS" => Some("lots".to_string()),
            "TILE_SIM_TICK_NS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(cfg.frames, 250);
        assert_eq!(cfg.sweeps, 100);
        assert_eq!(cfg.tick_ns, 1_000);
    }

    #[test]
    fn args_override_env() {
        let cfg = RunConfig::default()
            .parse_args(&args(&["grid", "--sweeps", "7", "--strategy", "c", "--dump"]))
            .unwrap();
        assert_eq!(cfg.mode, Mode::Grid);
        assert_eq!(cfg.sweeps, 7);
        assert_eq!(cfg.strategies(), vec![Strategy::CachedIndex]);
        assert!(cfg.dump);
        assert!(!cfg.watch);
    }

    #[test]
    fn layout_all_clears_selection() {
        let cfg = RunConfig::default()
            .parse_args(&args(&["--layout", "aos", "--layout", "all"]))
            .unwrap();
        assert_eq!(cfg.layout, None);
    }

    #[test]
    fn bad_arguments_are_errors() {
        let base = RunConfig::default();
        let cases: [&[&str]; 7] = [
            &["--frames"],
            &["--frames", "many"],
            &["--tick-ns", "0"],
            &["--layout", "ecs"],
            &["--strategy", "z"],
            &["--fast"],
            &["entities", "grid"],
        ];
        for bad in cases {
            assert!(base.clone().parse_args(&args(bad)).is_err(), "{:?}", bad);
        }
    }
}
