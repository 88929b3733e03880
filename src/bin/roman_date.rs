// ============================================================================
// Roman Date
// Prints 2019-12-22 as year, month and day numerals
// ============================================================================

use roman_numeral::domain::DateReport;

const YEAR: i32 = 2019;
const MONTH: u32 = 12;
const DAY: u32 = 22;

fn main() {
    #[cfg(feature = "logging")]
    roman_numeral::utils::init_logging();

    let Some(report) = DateReport::from_ymd(YEAR, MONTH, DAY) else {
        tracing::error!(year = YEAR, month = MONTH, day = DAY, "not a calendar date");
        std::process::exit(1);
    };

    tracing::info!(date = %report.date, "printing date report");
    print!("{}", report);
}
