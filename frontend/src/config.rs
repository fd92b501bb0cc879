use chrono::Weekday;

/// First day of the visible week.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Vertical pixels per hour in the time grid.
pub const PX_PER_HOUR: f32 = 60.0;

/// Minimum rendered height for a timed event block, so zero-length or
/// near-zero ranges stay clickable.
pub const MIN_EVENT_BLOCK_PX: f32 = 20.0;

/// Height of the spacer above each day column's hour grid.
pub const DAY_HEADER_PX: f32 = 48.0;

/// Extra height reserved per concurrent all-day event.
pub const ALL_DAY_ROW_PX: f32 = 24.0;
