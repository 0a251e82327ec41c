/// Format strings backing the named date patterns.
pub const HOUR_AND_MINUTE_FORMAT: &str = "HH:mm";
pub const DAY_AND_MONTH_FORMAT: &str = "d MMM";
pub const FULL_DATE_FORMAT: &str = "yyyy-MM-dd";
pub const TIMESTAMP_FORMAT: &str =
    const_str::concat!(FULL_DATE_FORMAT, " ", HOUR_AND_MINUTE_FORMAT);
pub const DAY_AND_FULL_MONTH_FORMAT: &str = "d MMMM";
pub const FULL_MONTH_FORMAT: &str = "MMMM";

/// Environment variables consulted, in order, for the process locale.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Default look-ahead for upcoming birthdays, in days.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Optional settings file read by [`crate::config::Settings::load`].
pub const CONFIG_FILE_NAME: &str = "birthbook.toml";
