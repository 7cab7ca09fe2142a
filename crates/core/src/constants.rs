/// Currency assigned to assets created without one
pub const DEFAULT_CURRENCY: &str = "TWD";

/// Number of import log rows returned when no limit is given
pub const DEFAULT_IMPORT_LOG_LIMIT: i64 = 50;
