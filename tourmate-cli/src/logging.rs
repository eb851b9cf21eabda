//! Terminal logging for the CLI.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Map the `-v` count to a level: warnings by default, then info, then debug.
pub(crate) const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install a stderr logger; a logger installed earlier is left in place.
pub(crate) fn init(verbosity: u8) {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(7, LevelFilter::Debug)]
    fn verbosity_raises_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[rstest]
    fn repeated_initialisation_is_harmless() {
        init(0);
        init(2);
    }
}
