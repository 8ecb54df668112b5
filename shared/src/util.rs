/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a unique ID for a sale line
pub fn new_line_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
