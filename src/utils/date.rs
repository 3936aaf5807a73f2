//! Parsing measurement dates typed into a form.

use chrono::NaiveDate;

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2024-08-17
                "%d-%m-%Y".to_string(), // 17-08-2024
                "%d/%m/%Y".to_string(), // 17/08/2024
                "%d.%m.%Y".to_string(), // 17.08.2024
                "%Y%m%d".to_string(),   // Compact: 20240817
                "%d %b %Y".to_string(), // 17 Aug 2024
                "%d %B %Y".to_string(), // 17 August 2024
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            return Some("%Y/%m/%d");
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            return Some("%Y.%m.%d");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_formats() {
        let config = DateFormatConfig::default();
        let expected = NaiveDate::from_ymd_opt(2024, 8, 17);

        assert_eq!(parse_date_string("2024-08-17", &config), expected);
        assert_eq!(parse_date_string("17/08/2024", &config), expected);
        assert_eq!(parse_date_string(" 17.08.2024 ", &config), expected);
        assert_eq!(parse_date_string("2024/08/17", &config), expected);
        assert_eq!(parse_date_string("yesterday", &config), None);
    }
}
