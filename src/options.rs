use anyhow::{Context, bail};
use lifeboard::{Board, BorderPolicy, Config, Status};
use log::LevelFilter;
use std::{str::FromStr, time::Duration};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optopt("i", "input", "seed the board from an RLE pattern", "FILE");
        opts.optopt("p", "preset", "start from a preset", "bordered|clamped");
        opts.optopt("n", "size", "set grid edge length", "SIZE");
        opts.optopt("b", "border", "set border policy", "bordered|clamped");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("l", "log-level", "set log level", "LEVEL");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeboard [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T>(&self, name: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    /// Generations to run headless, `None` meaning until interrupted
    pub fn generations(&self) -> anyhow::Result<Option<u64>> {
        self.get("gens")
    }

    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        Ok(self.get("log-level")?.unwrap_or(LevelFilter::Warn))
    }

    /// The preset named by `--preset`, overridden by any explicit settings
    pub fn config(&self) -> anyhow::Result<Config> {
        let preset = self.get("preset")?.unwrap_or_default();
        let mut config = Config::preset(preset);
        if let Some(size) = self.get("size")? {
            config.grid_size = size;
        }
        if let Some(policy) = self.get::<BorderPolicy>("border")? {
            config.border_policy = policy;
        }
        if let Some(millis) = self.get("sleep")? {
            config.tick_interval = Duration::from_millis(millis);
        }
        config.parallel = self.matches.opt_present("threads");
        config.validate()?;
        Ok(config)
    }

    pub fn fill_mode(&self) -> anyhow::Result<FillMode> {
        let mode_str = self.matches.opt_str("fill");
        match mode_str.as_deref() {
            None => Ok(FillMode::Empty),
            Some(s) => match FillMode::new(s) {
                Some(mode) => Ok(mode),
                None => bail!("unknown fill mode `{s}`"),
            },
        }
    }

    /// Pattern to seed the board with instead of `--fill`
    pub fn pattern_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Fills the simulated area of a freshly built board
    pub fn apply(self, board: &mut Board) -> anyhow::Result<()> {
        let alive = match self {
            Self::Random => {
                board.randomize();
                return Ok(());
            }
            Self::Empty => return Ok(()),
            Self::Alternating => board
                .simulated_positions()
                .filter(|pos| (pos.x + pos.y) % 2 == 0)
                .collect::<Vec<_>>(),
            Self::All => board.simulated_positions().collect(),
        };
        for pos in alive {
            board.set(pos, Status::Alive)?;
        }
        Ok(())
    }
}
