use serde::Serialize;

use crate::error::ProjectionError;

use super::YearlyResult;

/// 전체 기간 집계 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_tco: f64,
    pub total_revenue: f64,
    /// 총수익 - 총 TCO
    pub net_profit: f64,
    /// 순이익 / 총 TCO (소수). 총 TCO가 0이면 None
    pub roi: Option<f64>,
}

impl SummaryMetrics {
    /// ROI를 반환한다. 총 TCO가 0이면 `DivisionByZero`.
    pub fn try_roi(&self) -> Result<f64, ProjectionError> {
        self.roi.ok_or(ProjectionError::DivisionByZero)
    }
}

/// 연도별 결과를 연도 순서대로 합산해 집계 지표를 만든다.
pub fn summarize(years: &[YearlyResult]) -> SummaryMetrics {
    let total_tco: f64 = years.iter().map(|y| y.cost.total()).sum();
    let total_revenue: f64 = years.iter().map(|y| y.revenue.total()).sum();
    let net_profit = total_revenue - total_tco;
    let roi = if total_tco == 0.0 {
        None
    } else {
        Some(net_profit / total_tco)
    };
    SummaryMetrics {
        total_tco,
        total_revenue,
        net_profit,
        roi,
    }
}
