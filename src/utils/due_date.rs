//! 截止时间组装
//!
//! 表单把日期、小时、分钟拆成三个字段提交，这里拼成一个时间点。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{CourseFlowError, Result};

/// 由 (date, hour, minute) 三段组装截止时间
///
/// - date 为空白时清空截止时间，返回 None
/// - hour 为空白时默认 22 点整
/// - minute 为空白时默认 0 分
/// - date 按 "YYYY-MM-DD" 解析，小时/分钟越界报 DateParse 错误
pub fn assemble_due_date(date: &str, hour: &str, minute: &str) -> Result<Option<DateTime<Utc>>> {
    let date = date.trim();
    if date.is_empty() {
        return Ok(None);
    }

    let (hour, minute) = if hour.trim().is_empty() {
        (22, 0)
    } else {
        let hour: u32 = hour
            .trim()
            .parse()
            .map_err(|_| CourseFlowError::date_parse(format!("无效的小时: {hour}")))?;
        let minute: u32 = if minute.trim().is_empty() {
            0
        } else {
            minute
                .trim()
                .parse()
                .map_err(|_| CourseFlowError::date_parse(format!("无效的分钟: {minute}")))?
        };
        (hour, minute)
    };

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let datetime: NaiveDateTime = day
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| CourseFlowError::date_parse(format!("无效的时间: {hour}:{minute}")))?;

    Ok(Some(DateTime::<Utc>::from_naive_utc_and_offset(
        datetime,
        Utc,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_blank_date_clears_due_date() {
        assert!(assemble_due_date("", "10", "30").unwrap().is_none());
        assert!(assemble_due_date("   ", "", "").unwrap().is_none());
    }

    #[test]
    fn test_blank_hour_defaults_to_22() {
        let due = assemble_due_date("2026-09-01", "", "45").unwrap().unwrap();
        assert_eq!(due.hour(), 22);
        assert_eq!(due.minute(), 0);
    }

    #[test]
    fn test_blank_minute_defaults_to_zero() {
        let due = assemble_due_date("2026-09-01", "9", "").unwrap().unwrap();
        assert_eq!(due.hour(), 9);
        assert_eq!(due.minute(), 0);
    }

    #[test]
    fn test_full_timestamp() {
        let due = assemble_due_date("2026-09-01", "23", "59").unwrap().unwrap();
        assert_eq!(due.to_rfc3339(), "2026-09-01T23:59:00+00:00");
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert!(assemble_due_date("not-a-date", "10", "0").is_err());
        assert!(assemble_due_date("2026-09-01", "25", "0").is_err());
        assert!(assemble_due_date("2026-09-01", "ten", "0").is_err());
    }
}
