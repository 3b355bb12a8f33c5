//! Time picker contents.
//!
//! Departure can be "now" or any half hour from 6:00 to 20:30. The return
//! limit offers the same half hours plus 21:00.

use super::dto::{TimeOption, TimeOptionsResponse};

/// First hour offered in the pickers.
const FIRST_HOUR: u32 = 6;

/// Last hour offered; both :00 and :30 are included.
const LAST_HOUR: u32 = 20;

/// Extra final choice for the return limit.
const LATEST_RETURN_LIMIT: &str = "21:00";

/// Return limit selected by default.
pub const DEFAULT_RETURN_LIMIT: &str = "17:00";

/// Departure bound selected by default.
pub const DEFAULT_DEPART_AFTER: &str = "now";

fn half_hours() -> Vec<TimeOption> {
    (FIRST_HOUR..=LAST_HOUR)
        .flat_map(|h| ["00", "30"].map(|m| format!("{h}:{m}")))
        .map(|label| TimeOption {
            value: label.clone(),
            label,
        })
        .collect()
}

/// Choices for the departure picker, "now" first.
pub fn depart_after_options() -> Vec<TimeOption> {
    let mut options = vec![TimeOption {
        value: DEFAULT_DEPART_AFTER.to_string(),
        label: "現在時刻".to_string(),
    }];
    options.extend(half_hours());
    options
}

/// Choices for the return limit picker.
pub fn return_limit_options() -> Vec<TimeOption> {
    let mut options = half_hours();
    options.push(TimeOption {
        value: LATEST_RETURN_LIMIT.to_string(),
        label: LATEST_RETURN_LIMIT.to_string(),
    });
    options
}

/// Both pickers with their defaults.
pub fn time_options() -> TimeOptionsResponse {
    TimeOptionsResponse {
        depart_after: depart_after_options(),
        return_limit: return_limit_options(),
        default_depart_after: DEFAULT_DEPART_AFTER.to_string(),
        default_return_limit: DEFAULT_RETURN_LIMIT.to_string(),
    }
}
