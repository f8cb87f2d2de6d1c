//! Shared utility functions for FCI crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Europe::Helsinki;
    use chrono_tz::Tz;

    /// Convert a UTC instant given as epoch milliseconds to Helsinki local time.
    ///
    /// Returns `None` for values outside chrono's representable range.
    pub fn utc_millis_to_helsinki(millis: i64) -> Option<DateTime<Tz>> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|utc| utc.with_timezone(&Helsinki))
    }

    /// Format a zoned instant as "d.M.yyyy" without leading zeros, e.g. "3.11.2021".
    pub fn format_day_month_year(date: &DateTime<Tz>) -> String {
        date.format("%-d.%-m.%Y").to_string()
    }

    /// Helsinki-local "d.M.yyyy" label for a UTC epoch-millisecond instant.
    pub fn helsinki_date_label(millis: i64) -> Option<String> {
        utc_millis_to_helsinki(millis).map(|date| format_day_month_year(&date))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_helsinki_date_label() {
            // 2021-11-03T00:00:00Z; Helsinki is UTC+2 in November
            assert_eq!(
                helsinki_date_label(1_635_897_600_000).as_deref(),
                Some("3.11.2021")
            );
        }

        #[test]
        fn test_no_leading_zeros() {
            // 2022-02-05T12:00:00Z renders single-digit day and month unpadded
            assert_eq!(
                helsinki_date_label(1_644_062_400_000).as_deref(),
                Some("5.2.2022")
            );
        }

        #[test]
        fn test_winter_offset_rolls_date() {
            // 2021-12-31T22:30:00Z is already 1.1.2022 at UTC+2
            assert_eq!(
                helsinki_date_label(1_640_989_800_000).as_deref(),
                Some("1.1.2022")
            );
        }

        #[test]
        fn test_summer_offset_rolls_date() {
            // 2021-06-30T21:30:00Z is already 1.7.2021 at UTC+3 (EEST)
            assert_eq!(
                helsinki_date_label(1_625_088_600_000).as_deref(),
                Some("1.7.2021")
            );
        }

        #[test]
        fn test_out_of_range_millis() {
            assert!(utc_millis_to_helsinki(i64::MAX).is_none());
            assert!(helsinki_date_label(i64::MAX).is_none());
        }

        #[test]
        fn test_epoch_zero_is_a_valid_instant() {
            assert_eq!(helsinki_date_label(0).as_deref(), Some("1.1.1970"));
        }
    }
}
