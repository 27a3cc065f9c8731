//! 服务排期判定
//!
//! 提供"即将到来的预约"的纯函数判定逻辑

use chrono::Utc;

/// 即将到来的预约所允许的状态字面量
///
/// 注意: status 本身是自由文本，这里只做精确匹配，不做枚举约束
const UPCOMING_STATUSES: &[&str] = &["Scheduled", "Pending"];

/// 获取当前 UTC 日期字符串（"YYYY-MM-DD"）
///
/// ISO 日期按字典序排序与按时间排序一致，
/// 因此日期比较可以直接使用字符串比较
pub fn today_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// 判断预约是否"即将到来"
///
/// 规则:
/// - service_date >= today（字符串字典序比较）
/// - status 精确等于 "Scheduled" 或 "Pending"
pub fn is_upcoming(service_date: &str, status: &str, today: &str) -> bool {
    service_date >= today && UPCOMING_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_stamp_format() {
        let today = today_stamp();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[test]
    fn test_future_scheduled_is_upcoming() {
        assert!(is_upcoming("2099-01-01", "Scheduled", "2026-08-07"));
        assert!(is_upcoming("2099-01-01", "Pending", "2026-08-07"));
    }

    #[test]
    fn test_today_counts_as_upcoming() {
        assert!(is_upcoming("2026-08-07", "Scheduled", "2026-08-07"));
    }

    #[test]
    fn test_past_date_is_not_upcoming() {
        assert!(!is_upcoming("2026-08-06", "Scheduled", "2026-08-07"));
    }

    #[test]
    fn test_completed_status_is_not_upcoming() {
        assert!(!is_upcoming("2099-01-01", "Completed", "2026-08-07"));
        assert!(!is_upcoming("2099-01-01", "Cancelled", "2026-08-07"));
    }

    #[test]
    fn test_status_match_is_exact() {
        // status 是自由文本，大小写或空格不同都不算
        assert!(!is_upcoming("2099-01-01", "scheduled", "2026-08-07"));
        assert!(!is_upcoming("2099-01-01", "Scheduled ", "2026-08-07"));
        assert!(!is_upcoming("2099-01-01", "", "2026-08-07"));
    }

    #[test]
    fn test_lexicographic_date_comparison() {
        // ISO 日期字典序与时间序一致
        assert!(is_upcoming("2026-12-01", "Pending", "2026-08-07"));
        assert!(!is_upcoming("2025-12-31", "Pending", "2026-08-07"));
    }
}
