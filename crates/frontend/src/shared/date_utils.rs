//! Clock helpers; everything is local time as the browser sees it.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Header clock text, `14:05` -> `02:05 pm`
pub fn clock_text(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{:02}:{:02} {}", hour, time.minute(), if is_pm { "pm" } else { "am" })
}

/// Table date, `2024-03-15` -> `15 Mar 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_text() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(clock_text(t(14, 5)), "02:05 pm");
        assert_eq!(clock_text(t(0, 30)), "12:30 am");
        assert_eq!(clock_text(t(12, 0)), "12:00 pm");
        assert_eq!(clock_text(t(9, 59)), "09:59 am");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15 Mar 2024");
    }
}
