//! 차량 보유비용(TCO)과 파트너십 수익 예측 계산 모듈 모음.
//! 검증 → 연도별 비용 → 연도별 수익 → 집계 순으로 진행한다.

pub mod analysis;
pub mod cost;
pub mod params;
pub mod revenue;
pub mod summary;
pub mod validate;

use log::info;
use serde::Serialize;

use crate::error::ProjectionError;

pub use analysis::{BreakEven, CostTotals, Recommendation};
pub use cost::{CostBreakdown, CostProfile};
pub use params::*;
pub use revenue::RevenueBreakdown;
pub use summary::{summarize, SummaryMetrics};
pub use validate::validate;

/// 보유 연도 하나의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyResult {
    /// 1부터 시작하는 보유 연도
    pub year: u32,
    /// 연말 차량 잔존가치 [$]
    pub residual_value: f64,
    /// 해당 연도 활성 사용자 수
    pub active_users: f64,
    pub cost: CostBreakdown,
    pub revenue: RevenueBreakdown,
}

/// 전체 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub vehicle_type: VehicleType,
    pub tier: PartnershipTier,
    pub annual_mileage: u32,
    #[serde(skip)]
    churn_rate: Option<f64>,
    pub summary: SummaryMetrics,
    pub years: Vec<YearlyResult>,
}

/// 입력을 검증한 뒤 연도별 비용/수익과 집계 지표를 계산한다.
///
/// 검증에 실패하면 계산을 시작하지 않고 오류를 반환한다.
pub fn project(input: &ProjectionInput) -> Result<Projection, ProjectionError> {
    validate(input)?;

    let costs = cost::yearly_costs(&input.vehicle, &input.market);
    let revenues = revenue::yearly_revenues(
        &input.vehicle,
        &input.market,
        &input.partnership,
        input.user_growth.as_ref(),
    );

    let years: Vec<YearlyResult> = costs
        .into_iter()
        .zip(revenues)
        .map(|(c, r)| YearlyResult {
            year: c.year,
            residual_value: c.residual_value,
            active_users: r.active_users,
            cost: c.cost,
            revenue: r.revenue,
        })
        .collect();
    let summary = summarize(&years);

    info!(
        "projection {} / {}: {} years, TCO={:.2}, revenue={:.2}",
        input.vehicle.vehicle_type,
        input.partnership.tier,
        years.len(),
        summary.total_tco,
        summary.total_revenue
    );

    Ok(Projection {
        vehicle_type: input.vehicle.vehicle_type,
        tier: input.partnership.tier,
        annual_mileage: input.vehicle.annual_mileage,
        churn_rate: input.user_growth.as_ref().map(|u| u.churn_rate),
        summary,
        years,
    })
}
