use log::LevelFilter;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
	/// Silence log messages.
	#[arg(short, long)]
	pub quiet: bool,

	/// Turn debugging information on (-v, -vv, -vvv)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl LogArgs {
	/// Level selected by the flags: warnings by default, `-v` per extra level.
	pub fn level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Off;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}

	/// Installs `env_logger` on stderr. `RUST_LOG`, when set, refines the level.
	pub fn setup_logging(&self) -> Result<(), log::SetLoggerError> {
		env_logger::Builder::new()
			.filter_level(self.level())
			.parse_default_env()
			.try_init()
	}
}
