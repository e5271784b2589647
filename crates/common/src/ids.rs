use uuid::Uuid;

/// Generates a request id used to correlate the log lines of one dispatch.
pub fn request_id() -> String {
    Uuid::new_v4().to_string()
}
