//! Command line configuration for the terminal binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

/// Environment variable naming a log file when `--log-file` is absent
pub const LOG_ENV: &str = "BLOCKFALL_LOG";

pub const USAGE: &str = "\
usage: blockfall [--seed <u32>] [--log-file <path>]

  --seed <u32>        piece generator seed (default: from the clock)
  --log-file <path>   append logs to <path> (or set BLOCKFALL_LOG)
  -h, --help          print this help

keys: arrows move/drop/rotate, x/z rotate, space hard drop,
      p pause, enter start, r restart, q/esc quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_file: Option<PathBuf>,
}

/// What the binary should do after parsing its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Help,
}

/// Parse arguments (without the program name).
///
/// `env_log` is the value of [`LOG_ENV`], used when `--log-file` is not given.
pub fn parse_args(args: &[String], env_log: Option<String>) -> Result<Command> {
    let mut seed = None;
    let mut log_file = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--log-file" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                log_file = Some(PathBuf::from(v));
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    let log_file = log_file.or_else(|| env_log.filter(|s| !s.is_empty()).map(PathBuf::from));
    Ok(Command::Play(Config {
        seed: seed.unwrap_or_else(clock_seed),
        log_file,
    }))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_seed_and_log_file() {
        let cmd = parse_args(&args(&["--seed", "42", "--log-file", "/tmp/b.log"]), None).unwrap();
        assert_eq!(
            cmd,
            Command::Play(Config {
                seed: 42,
                log_file: Some(PathBuf::from("/tmp/b.log")),
            })
        );
    }

    #[test]
    fn env_log_is_fallback() {
        let Command::Play(cfg) = parse_args(&args(&["--seed", "1"]), Some("env.log".into())).unwrap() else {
            panic!("expected play");
        };
        assert_eq!(cfg.log_file, Some(PathBuf::from("env.log")));

        let Command::Play(cfg) = parse_args(
            &args(&["--log-file", "flag.log"]),
            Some("env.log".into()),
        )
        .unwrap() else {
            panic!("expected play");
        };
        assert_eq!(cfg.log_file, Some(PathBuf::from("flag.log")));
    }

    #[test]
    fn no_log_by_default() {
        let Command::Play(cfg) = parse_args(&[], Some(String::new())).unwrap() else {
            panic!("expected play");
        };
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn help() {
        assert_eq!(parse_args(&args(&["-h"]), None).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--seed", "3", "--help"]), None).unwrap(), Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--seed"]), None).is_err());
        assert!(parse_args(&args(&["--seed", "-1"]), None).is_err());
        assert!(parse_args(&args(&["--seed", "abc"]), None).is_err());
        assert!(parse_args(&args(&["--log-file"]), None).is_err());
        assert!(parse_args(&args(&["--fast"]), None).is_err());
    }
}
