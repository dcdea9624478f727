use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid date string: {input:?}, expected yyyy/MM/dd or yyyy-MM-dd")]
    InvalidDate { input: String },

    #[error("Invalid date range: {from} must be before {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("No price defined for {date}")]
    UnpricedNight { date: NaiveDate },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_display() {
        let err = BookingError::InvalidDate {
            input: "06-01-2024".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("06-01-2024"));
        assert!(msg.contains("yyyy/MM/dd"));
    }

    #[test]
    fn invalid_range_display() {
        let err = BookingError::InvalidRange {
            from: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2024-06-10"));
        assert!(msg.contains("2024-06-05"));
    }

    #[test]
    fn unpriced_night_display() {
        let err = BookingError::UnpricedNight {
            date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
        };
        assert!(err.to_string().contains("2024-07-14"));
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{invalid").unwrap_err();
        let err: BookingError = json_err.into();
        assert!(matches!(err, BookingError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}
