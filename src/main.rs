use clap::{value_parser, Arg, ArgAction, Command};
use log::info;
use simplelog::{
    format_description, ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;

use run_quadruped_controller::application;
use run_quadruped_controller::enums::ControlStrategy;

fn main() {
    // Parse the command line arguments
    let matches = Command::new("control system")
        .about("Quadruped motor control system.")
        .arg(
            Arg::new("strategy")
                .short('t')
                .long("strategy")
                .help("Control strategy: 1 (open-loop gait), 2 (coupled PID)")
                .default_value("1")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("simulate")
                .short('s')
                .long("simulate")
                .action(ArgAction::SetTrue)
                .help("Run the simulation mode"),
        )
        .arg(
            Arg::new("level")
                .short('l')
                .long("log-level")
                .help("Log level: 0 (Off), 1 (Error), 2 (Warn), 3 (Info), 4 (Debug), 5 (Trace)")
                .default_value("3")
                .value_parser(value_parser!(u32)),
        )
        .get_matches();

    // Check the strategy
    let strategy = get_control_strategy(matches.get_one::<u8>("strategy"));

    // Check the simulation mode
    let is_simulation_mode = matches.get_flag("simulate");

    // Check the log filter
    let log_filter = get_log_filter(matches.get_one::<u32>("level"));

    // Initiate the logger
    initiate_logger(log_filter, "application.log");
    info!("Log level: {log_filter}.");

    // Run the application
    application::run(strategy, is_simulation_mode);
}

/// Get the control strategy.
///
/// # Arguments
/// * `strategy` - Strategy value.
///
/// # Returns
/// Control strategy.
///
/// # Panics
/// If the strategy value is not recognized.
fn get_control_strategy(strategy: Option<&u8>) -> ControlStrategy {
    let value = strategy.expect("There should be a strategy.");

    ControlStrategy::from_repr(*value)
        .expect("The strategy should be 1 (open-loop gait) or 2 (coupled PID).")
}

/// Get the log filter.
///
/// # Arguments
/// * `log_level` - Log level.
///
/// # Returns
/// Log filter.
fn get_log_filter(log_level: Option<&u32>) -> LevelFilter {
    match log_level {
        Some(level) => match level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            5 => LevelFilter::Trace,
            _ => LevelFilter::Info,
        },
        None => LevelFilter::Info,
    }
}

/// Initiate the logger.
///
/// # Arguments
/// * `level` - Log level.
/// * `filepath` - Log file path.
fn initiate_logger(level: LevelFilter, filepath: &str) {
    let config = ConfigBuilder::new()
        .set_time_format_custom(format_description!(
            "[year]/[month]/[day] [hour]:[minute]:[second].[subsecond]"
        ))
        .build();

    // Log to the terminal
    let logger_terminal = TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    // Log to the file
    let logger_file: Option<Box<WriteLogger<File>>>;
    match File::create(filepath) {
        Ok(file) => {
            logger_file = Some(WriteLogger::new(level, config.clone(), file));
        }
        Err(error) => {
            logger_file = None;
            eprintln!("Failed to create the log file: {error}.");
        }
    }

    if logger_file.is_some() {
        let _ = CombinedLogger::init(vec![logger_terminal, logger_file.unwrap()]);
    } else {
        let _ = CombinedLogger::init(vec![logger_terminal]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_control_strategy() {
        assert_eq!(
            get_control_strategy(Some(&1)),
            ControlStrategy::OpenLoopGait
        );
        assert_eq!(get_control_strategy(Some(&2)), ControlStrategy::CoupledPid);
    }

    #[test]
    #[should_panic]
    fn test_get_control_strategy_panic() {
        let _ = get_control_strategy(Some(&3));
    }

    #[test]
    fn test_get_log_filter() {
        assert_eq!(get_log_filter(Some(&0)), LevelFilter::Off);
        assert_eq!(get_log_filter(Some(&1)), LevelFilter::Error);
        assert_eq!(get_log_filter(Some(&2)), LevelFilter::Warn);
        assert_eq!(get_log_filter(Some(&3)), LevelFilter::Info);
        assert_eq!(get_log_filter(Some(&4)), LevelFilter::Debug);
        assert_eq!(get_log_filter(Some(&5)), LevelFilter::Trace);

        assert_eq!(get_log_filter(Some(&6)), LevelFilter::Info);

        assert_eq!(get_log_filter(None), LevelFilter::Info);
    }
}
