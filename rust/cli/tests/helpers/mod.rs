//! Shared harness for the CLI integration tests.
//!
//! `CliRunner` drives `minipoker_cli::run_with_input` in-process, capturing
//! stdout, stderr and the exit code. Environment overrides are applied for
//! the duration of one run and then restored, so tests that use them must
//! be `#[serial]`.
#![allow(dead_code)]

use std::io::Cursor;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        CliRunner
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], "")
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, "")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], input)
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let argv: Vec<String> = std::iter::once("minipoker".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let start = Instant::now();
        let code = minipoker_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }
}

/// Clears every variable the CLI reads, restoring them on drop.
pub struct CleanEnv(EnvGuard);

pub const CONFIG_VARS: [&str; 5] = [
    "MINIPOKER_CONFIG",
    "MINIPOKER_SEED",
    "MINIPOKER_SMALL_BLIND",
    "MINIPOKER_STARTING_MONEY",
    "MINIPOKER_ACE_LOW",
];

impl CleanEnv {
    pub fn new() -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        CleanEnv(EnvGuard { restores })
    }
}
