#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskpilot::libs::error::TaskError;
    use taskpilot::libs::task::{parse_date, parse_time};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(parse_date("2025-08-05").unwrap(), ymd(2025, 8, 5));
        assert_eq!(parse_date("05-08-2025").unwrap(), ymd(2025, 8, 5));
        assert_eq!(parse_date("05/08/2025").unwrap(), ymd(2025, 8, 5));
        assert_eq!(parse_date("2025/08/05").unwrap(), ymd(2025, 8, 5));
        assert_eq!(parse_date(" 2025-08-05 ").unwrap(), ymd(2025, 8, 5));
    }

    #[test]
    fn test_day_first_wins_over_month_first() {
        assert_eq!(parse_date("03-04-2025").unwrap(), ymd(2025, 4, 3));
        // Only valid month-first.
        assert_eq!(parse_date("12-31-2025").unwrap(), ymd(2025, 12, 31));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(parse_date("2025-02-30"), Err(TaskError::DateParse(_))));
        assert!(matches!(parse_date("tomorrow"), Err(TaskError::DateParse(_))));
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(parse_time("12:30 PM").unwrap(), hm(12, 30));
        assert_eq!(parse_time("12:30PM").unwrap(), hm(12, 30));
        assert_eq!(parse_time("09:00 am").unwrap(), hm(9, 0));
        assert_eq!(parse_time("12.30 pm").unwrap(), hm(12, 30));
        assert_eq!(parse_time("23:30").unwrap(), hm(23, 30));
        assert_eq!(parse_time("12:00 AM").unwrap(), hm(0, 0));
    }

    #[test]
    fn test_invalid_times() {
        assert!(matches!(parse_time("13:00 PM"), Err(TaskError::TimeParse(_))));
        assert!(matches!(parse_time("noon"), Err(TaskError::TimeParse(_))));
    }
}
