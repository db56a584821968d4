//! 파트너십/서비스 수익원별 연도별 수익 계산.

use log::debug;
use serde::Serialize;

use super::cost::growth_factor;
use super::params::{MarketParams, PartnershipParams, UserGrowthParams, VehicleParams};

/// 파트너 1곳당 연간 기본 수수료 [$]
pub const PARTNER_FEE: f64 = 1_000.0;
/// 주행거리 연동 수익원의 기준 연간 주행거리 [mile]
pub const REFERENCE_ANNUAL_MILEAGE: f64 = 12_000.0;

// 채널 1개당 연간 기본 수익 [$]
pub const SERVICE_PROVIDER_FEE: f64 = 200.0;
pub const INSURANCE_PARTNER_FEE: f64 = 150.0;
pub const PARTS_RETAILER_FEE: f64 = 100.0;
pub const FUEL_PARTNER_FEE: f64 = 120.0;
pub const FINANCIAL_SERVICE_FEE: f64 = 180.0;
pub const DATA_PROVIDER_FEE: f64 = 250.0;
pub const ENTERPRISE_SOLUTION_FEE: f64 = 1_000.0;

/// 한 해의 수익원별 내역 [$].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RevenueBreakdown {
    pub partnership_fees: f64,
    pub service_providers: f64,
    pub insurance_partners: f64,
    pub parts_retailers: f64,
    pub fuel_partners: f64,
    pub financial_services: f64,
    pub data_providers: f64,
    pub enterprise_saas: f64,
    pub user_saas: f64,
}

impl RevenueBreakdown {
    pub fn total(&self) -> f64 {
        self.partnership_fees
            + self.service_providers
            + self.insurance_partners
            + self.parts_retailers
            + self.fuel_partners
            + self.financial_services
            + self.data_providers
            + self.enterprise_saas
            + self.user_saas
    }
}

/// 한 해의 수익 계산 결과와 해당 연도 활성 사용자 수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyRevenue {
    pub year: u32,
    pub active_users: f64,
    pub revenue: RevenueBreakdown,
}

/// 연도별 활성 사용자 수를 구한다. `users[t] = users[t-1] × (1 + g - c) × e`, `users[0]` = 초기 사용자.
///
/// 반환 벡터의 i번째 값은 i+1년차 활성 사용자 수.
pub fn project_active_users(params: &UserGrowthParams, years: u32) -> Vec<f64> {
    let step = (1.0 + params.growth_rate - params.churn_rate) * params.engagement_factor;
    let mut users = f64::from(params.initial_users);
    (0..years)
        .map(|_| {
            users *= step;
            users
        })
        .collect()
}

fn channel_fee(fee: f64, channels: &[String], multiplier: f64) -> f64 {
    fee * channels.len() as f64 * multiplier
}

/// 1년차(성장 반영 전) 수익원별 기준액. 사용자 구독 수익은 포함하지 않는다.
pub fn base_revenue(vehicle: &VehicleParams, partnership: &PartnershipParams) -> RevenueBreakdown {
    let mult = partnership.tier.multiplier();
    let mileage_factor = f64::from(vehicle.annual_mileage) / REFERENCE_ANNUAL_MILEAGE;
    RevenueBreakdown {
        partnership_fees: PARTNER_FEE * f64::from(partnership.partner_count) * mult,
        service_providers: channel_fee(SERVICE_PROVIDER_FEE, &partnership.service_providers, mult)
            * mileage_factor,
        insurance_partners: channel_fee(
            INSURANCE_PARTNER_FEE,
            &partnership.insurance_partners,
            mult,
        ),
        parts_retailers: channel_fee(PARTS_RETAILER_FEE, &partnership.parts_retailers, mult)
            * mileage_factor,
        fuel_partners: channel_fee(FUEL_PARTNER_FEE, &partnership.fuel_partners, mult)
            * mileage_factor,
        financial_services: channel_fee(
            FINANCIAL_SERVICE_FEE,
            &partnership.financial_services,
            mult,
        ),
        data_providers: channel_fee(DATA_PROVIDER_FEE, &partnership.data_providers, mult),
        enterprise_saas: channel_fee(
            ENTERPRISE_SOLUTION_FEE,
            &partnership.enterprise_solutions,
            mult,
        ),
        user_saas: 0.0,
    }
}

/// 연도별 수익을 계산한다. 입력은 검증이 끝난 상태여야 한다.
///
/// 사용자 구독 외 수익원은 연간 성장률로 `t-1`회 복리 성장한다.
/// 사용자 구독 수익은 활성 사용자 곡선을 그대로 따르며 사용자 모델이 없으면 0이다.
pub fn yearly_revenues(
    vehicle: &VehicleParams,
    market: &MarketParams,
    partnership: &PartnershipParams,
    user_growth: Option<&UserGrowthParams>,
) -> Vec<YearlyRevenue> {
    let years = vehicle.ownership_years;
    let base = base_revenue(vehicle, partnership);
    let users = match user_growth {
        Some(params) => project_active_users(params, years),
        None => vec![0.0; years as usize],
    };
    let per_user = user_growth.map_or(0.0, |p| p.revenue_per_user);

    users
        .into_iter()
        .zip(1..=years)
        .map(|(active_users, year)| {
            let g = growth_factor(market.revenue_growth_rate, year);
            let revenue = RevenueBreakdown {
                partnership_fees: base.partnership_fees * g,
                service_providers: base.service_providers * g,
                insurance_partners: base.insurance_partners * g,
                parts_retailers: base.parts_retailers * g,
                fuel_partners: base.fuel_partners * g,
                financial_services: base.financial_services * g,
                data_providers: base.data_providers * g,
                enterprise_saas: base.enterprise_saas * g,
                user_saas: active_users * per_user,
            };
            debug!(
                "revenue year {year}: total={:.2} active_users={:.1}",
                revenue.total(),
                active_users
            );
            YearlyRevenue {
                year,
                active_users,
                revenue,
            }
        })
        .collect()
}
