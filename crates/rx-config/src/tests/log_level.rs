use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_known_levels_parse() {
    assert_eq!(*LogLevel::from_str("debug").unwrap(), LevelFilter::Debug);
    assert_eq!(*LogLevel::from_str("WARN").unwrap(), LevelFilter::Warn);
    assert_eq!(*LogLevel::from_str("off").unwrap(), LevelFilter::Off);
}

#[test]
fn test_unknown_level_falls_back_to_info() {
    assert_eq!(*LogLevel::from_str("verbose").unwrap(), LevelFilter::Info);
}
