//! 연도별 보유 비용(감가상각, 연료/전기, 정비, 보험, 등록) 계산.

use log::debug;
use serde::Serialize;

use super::params::{MarketParams, VehicleParams, VehicleType};

/// 정비비의 연간 노후 가산율 (차령 1년마다 +10%)
pub const MAINTENANCE_AGE_STEP: f64 = 0.10;

/// 차종별 비용 계수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostProfile {
    /// 연간 감가율 (잔존가치 대비)
    pub depreciation_rate: f64,
    /// 연비 [mile/gal], 내연기관을 쓰지 않으면 None
    pub mpg: Option<f64>,
    /// 전비 [kWh/mile]
    pub kwh_per_mile: f64,
    /// 주행거리 중 연료로 달리는 비율
    pub gas_share: f64,
    /// 주행거리 중 전기로 달리는 비율
    pub electric_share: f64,
    /// 정비 단가 [$/mile]
    pub maintenance_per_mile: f64,
    /// 보험료율 (잔존가치 대비)
    pub insurance_rate: f64,
    /// 등록/세금 비율 (잔존가치 대비)
    pub registration_rate: f64,
}

impl VehicleType {
    pub fn cost_profile(&self) -> CostProfile {
        match self {
            VehicleType::ElectricVehicle => CostProfile {
                depreciation_rate: 0.15,
                mpg: None,
                kwh_per_mile: 0.30,
                gas_share: 0.0,
                electric_share: 1.0,
                maintenance_per_mile: 0.08,
                insurance_rate: 0.040,
                registration_rate: 0.010,
            },
            VehicleType::Hybrid => CostProfile {
                depreciation_rate: 0.18,
                mpg: Some(50.0),
                kwh_per_mile: 0.10,
                gas_share: 0.7,
                electric_share: 0.3,
                maintenance_per_mile: 0.10,
                insurance_rate: 0.045,
                registration_rate: 0.012,
            },
            VehicleType::Gasoline => CostProfile {
                depreciation_rate: 0.20,
                mpg: Some(25.0),
                kwh_per_mile: 0.0,
                gas_share: 1.0,
                electric_share: 0.0,
                maintenance_per_mile: 0.12,
                insurance_rate: 0.050,
                registration_rate: 0.015,
            },
            VehicleType::Diesel => CostProfile {
                depreciation_rate: 0.22,
                mpg: Some(30.0),
                kwh_per_mile: 0.0,
                gas_share: 1.0,
                electric_share: 0.0,
                maintenance_per_mile: 0.15,
                insurance_rate: 0.055,
                registration_rate: 0.018,
            },
        }
    }
}

/// 한 해의 비용 내역 [$].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub depreciation: f64,
    pub fuel: f64,
    pub electricity: f64,
    pub maintenance: f64,
    pub insurance: f64,
    pub registration: f64,
}

impl CostBreakdown {
    /// 연료 + 전기
    pub fn energy(&self) -> f64 {
        self.fuel + self.electricity
    }

    pub fn total(&self) -> f64 {
        self.depreciation
            + self.fuel
            + self.electricity
            + self.maintenance
            + self.insurance
            + self.registration
    }
}

/// 한 해의 비용 계산 결과와 연말 잔존가치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyCost {
    pub year: u32,
    pub residual_value: f64,
    pub cost: CostBreakdown,
}

/// `year`(1부터) 시점의 누적 상승 계수. 1년차는 상승 0회.
pub fn growth_factor(rate: f64, year: u32) -> f64 {
    (1.0 + rate).powi(year.saturating_sub(1) as i32)
}

/// 연도별 비용을 계산한다. 입력은 검증이 끝난 상태여야 한다.
///
/// - 감가상각: 전년도 잔존가치 × 감가율 (기하급수 감소, 물가 미반영)
/// - 연료/전기: 주행거리 ÷ 효율 × 단가, 단가는 물가상승률로 복리 증가
/// - 정비: 주행거리 × 단가 × (1 + 0.1·(t-1)) × 물가계수
/// - 보험/등록: 연초 잔존가치 × 비율 × 물가계수
pub fn yearly_costs(vehicle: &VehicleParams, market: &MarketParams) -> Vec<YearlyCost> {
    let profile = vehicle.vehicle_type.cost_profile();
    let mileage = f64::from(vehicle.annual_mileage);
    let mut value = vehicle.base_price;
    let mut out = Vec::with_capacity(vehicle.ownership_years as usize);

    for year in 1..=vehicle.ownership_years {
        let inflation = growth_factor(market.inflation_rate, year);
        let age = f64::from(year - 1);

        let depreciation = value * profile.depreciation_rate;
        let fuel = match profile.mpg {
            Some(mpg) => mileage * profile.gas_share / mpg * market.fuel_price * inflation,
            None => 0.0,
        };
        let electricity = mileage
            * profile.electric_share
            * profile.kwh_per_mile
            * market.electricity_rate
            * inflation;
        let maintenance = mileage
            * profile.maintenance_per_mile
            * (1.0 + age * MAINTENANCE_AGE_STEP)
            * inflation;
        let insurance = value * profile.insurance_rate * inflation;
        let registration = value * profile.registration_rate * inflation;

        value -= depreciation;
        let cost = CostBreakdown {
            depreciation,
            fuel,
            electricity,
            maintenance,
            insurance,
            registration,
        };
        debug!(
            "cost year {year}: total={:.2} residual={:.2}",
            cost.total(),
            value
        );
        out.push(YearlyCost {
            year,
            residual_value: value,
            cost,
        });
    }
    out
}
