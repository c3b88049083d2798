use chrono::Utc;

/// Get current Unix timestamp in milliseconds (UTC)
pub fn get_unix_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_monotonic_enough() {
        // given:
        let first = get_unix_timestamp_millis();

        // when:
        let second = get_unix_timestamp_millis();

        // then: wall clock never runs backwards between two immediate reads
        assert!(second >= first);
    }
}
