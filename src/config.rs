// Engine configuration. The engine owns exactly one knob: `maxKeys`, the
// store capacity (spec.md §6). Grounded on the teacher's
// `config::ConfigManager`, trimmed to this single value, and on
// examples/original_source/redish.py's `argparse` setup
// (`parser.add_argument("maxKeys")`).

use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub max_keys: usize,
}

impl EngineConfig {
    /// Parse `maxKeys` from the process's command-line arguments
    /// (argv[1], mirroring the one positional argument of the original
    /// Python CLI).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        args.next(); // skip argv[0]
        let Some(raw) = args.next() else {
            bail!("usage: redish-engine <maxKeys>");
        };
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let max_keys: usize = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("maxKeys must be a positive integer, got '{raw}'"))?;
        if max_keys == 0 {
            bail!("maxKeys must be greater than zero");
        }
        Ok(Self { max_keys })
    }
}
