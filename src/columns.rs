// src/columns.rs

//! Names of the columns the analysis binds to.
//! The input file has no declared schema, so these strings are the contract.

// --- Identifying columns ---
pub const COMPANY_NAME: &str = "Company Name";
pub const INDUSTRY: &str = "Industry";

// --- Price columns ---
pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const PREVIOUS_CLOSE: &str = "Previous Close";
pub const LAST_TRADED_PRICE: &str = "Last Traded Price";
pub const WEEK52_HIGH: &str = "52 Week High";
pub const WEEK52_LOW: &str = "52 Week Low";

// --- Movement and volume columns ---
pub const CHANGE: &str = "Change";
pub const PERCENTAGE_CHANGE: &str = "Percentage Change";
pub const SHARE_VOLUME: &str = "Share Volume";
pub const TRADED_VALUE: &str = "Value (Indian Rupee)";
pub const DAY365_PERCENTAGE_CHANGE: &str = "365 Day Percentage Change";
pub const DAY30_PERCENTAGE_CHANGE: &str = "30 Day Percentage Change";

// --- Derived columns ---
pub const AVERAGE_PRICE: &str = "Average Price";
pub const WEEK52_RANGE: &str = "52 Week Range";

/// Columns coerced to floating point, in file order.
pub const NUMERIC_COLUMNS: [&str; 13] = [
    OPEN,
    HIGH,
    LOW,
    PREVIOUS_CLOSE,
    LAST_TRADED_PRICE,
    CHANGE,
    PERCENTAGE_CHANGE,
    SHARE_VOLUME,
    TRADED_VALUE,
    WEEK52_HIGH,
    WEEK52_LOW,
    DAY365_PERCENTAGE_CHANGE,
    DAY30_PERCENTAGE_CHANGE,
];

/// Prices get a mean fill by default; zero is never a plausible price.
pub const PRICE_COLUMNS: [&str; 7] = [
    OPEN,
    HIGH,
    LOW,
    PREVIOUS_CLOSE,
    LAST_TRADED_PRICE,
    WEEK52_HIGH,
    WEEK52_LOW,
];

/// Every column the pipeline reads. Checked once right after loading.
pub fn required_columns() -> Vec<&'static str> {
    let mut required = vec![COMPANY_NAME, INDUSTRY];
    required.extend(NUMERIC_COLUMNS);
    required
}
