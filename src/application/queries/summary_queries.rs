//! Summary Queries

/// 获取统计摘要查询
#[derive(Debug, Clone)]
pub struct GetSummary;
