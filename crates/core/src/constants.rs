/// Maximum fraction digits shown for fee amounts (en-US locale default)
pub const DISPLAY_MAX_FRACTION_DIGITS: u32 = 3;

/// Grouping separator for fee amounts
pub const THOUSANDS_SEPARATOR: char = ',';

/// Column headers of the fee table, in display order
pub const FEE_TABLE_HEADERS: [&str; 7] = [
    "Business Description",
    "Code",
    "Trade License",
    "Fire Clearance",
    "Food Hygiene",
    "Health Certificate",
    "Pest Control",
];

/// Labels of the read-only selection detail fields, from industry down to activity
pub const DETAIL_FIELD_LABELS: [&str; 4] = [
    "Industry Code",
    "Business Category",
    "Business SubCategory",
    "Business Activity",
];

/// Placeholder shown in the search box
pub const SEARCH_PLACEHOLDER: &str = "Search or select an activity";
