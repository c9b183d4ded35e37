use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub timestamps: bool,
}

impl LogArgs {
    /// Attach the stderr logger.
    ///
    /// `default` is the verbosity level used when no `-v` flags are
    /// given; 3 maps to Info.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), log::SetLoggerError> {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        let log_level = match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.timestamps {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}
