//! 계산 결과를 읽기만 하는 파생 분석: 항목별 합계, 손익분기, 권고사항.

use serde::Serialize;

use super::{Projection, YearlyResult};

/// ROI가 이 값보다 낮으면 파트너 확대를 권고한다 (20%)
pub const TARGET_ROI: f64 = 0.20;
/// 연간 이탈률이 이 값을 넘으면 이탈 감소를 권고한다
pub const HIGH_CHURN_RATE: f64 = 0.25;

/// 항목별 비용 합계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostTotals {
    pub depreciation: f64,
    pub fuel: f64,
    pub electricity: f64,
    pub maintenance: f64,
    pub insurance: f64,
    pub registration: f64,
}

impl CostTotals {
    pub fn from_years(years: &[YearlyResult]) -> Self {
        years.iter().fold(Self::default(), |acc, y| Self {
            depreciation: acc.depreciation + y.cost.depreciation,
            fuel: acc.fuel + y.cost.fuel,
            electricity: acc.electricity + y.cost.electricity,
            maintenance: acc.maintenance + y.cost.maintenance,
            insurance: acc.insurance + y.cost.insurance,
            registration: acc.registration + y.cost.registration,
        })
    }

    pub fn energy(&self) -> f64 {
        self.fuel + self.electricity
    }
}

/// 손익분기 분석 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEven {
    /// 연평균 TCO [$/년]
    pub annual_tco: f64,
    /// 연평균 수익 [$/년]
    pub annual_revenue: f64,
    pub profitable: bool,
    /// 손익분기 도달 개월 수. 수익이 비용을 넘지 못하면 None
    pub break_even_months: Option<f64>,
}

/// 권고사항 종류. 문구는 i18n 키로 변환해 출력한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    RaisePartnerCount,
    ExpandDataIntegrations,
    ExpandInsurancePartnerships,
    ReduceChurn,
    WellBalanced,
}

impl Projection {
    pub fn cost_totals(&self) -> CostTotals {
        CostTotals::from_years(&self.years)
    }

    /// 총 TCO / 총 주행거리 [$/mile]
    pub fn tco_per_mile(&self) -> f64 {
        let miles = f64::from(self.annual_mileage) * self.years.len() as f64;
        if miles > 0.0 {
            self.summary.total_tco / miles
        } else {
            0.0
        }
    }

    /// 첫해 대비 마지막 해 수익 증가율 [%]
    pub fn revenue_growth_pct(&self) -> f64 {
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) if self.years.len() > 1 => {
                let first = first.revenue.total();
                if first > 0.0 {
                    (last.revenue.total() / first - 1.0) * 100.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn break_even(&self) -> BreakEven {
        let n = self.years.len().max(1) as f64;
        let annual_tco = self.summary.total_tco / n;
        let annual_revenue = self.summary.total_revenue / n;
        let profitable = annual_revenue > annual_tco;
        let break_even_months = profitable.then(|| 12.0 * annual_tco / annual_revenue);
        BreakEven {
            annual_tco,
            annual_revenue,
            profitable,
            break_even_months,
        }
    }

    /// 규칙 기반 권고사항. 해당 규칙이 없으면 `WellBalanced` 하나를 반환한다.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        let revenue = self.years.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, y| {
            (
                acc.0 + y.revenue.service_providers,
                acc.1 + y.revenue.data_providers,
                acc.2 + y.revenue.insurance_partners,
                acc.3 + y.revenue.parts_retailers,
            )
        });
        let (service, data, insurance, parts) = revenue;

        if self.summary.roi.map_or(true, |roi| roi < TARGET_ROI) {
            recs.push(Recommendation::RaisePartnerCount);
        }
        if data > service {
            recs.push(Recommendation::ExpandDataIntegrations);
        }
        if insurance < parts {
            recs.push(Recommendation::ExpandInsurancePartnerships);
        }
        if self.churn_rate.is_some_and(|c| c > HIGH_CHURN_RATE) {
            recs.push(Recommendation::ReduceChurn);
        }
        if recs.is_empty() {
            recs.push(Recommendation::WellBalanced);
        }
        recs
    }
}
