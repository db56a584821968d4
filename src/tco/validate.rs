use crate::error::ProjectionError;

use super::params::{MarketParams, ProjectionInput, UserGrowthParams, VehicleParams};

/// 허용하는 최대 보유 기간 [년]
pub const MAX_OWNERSHIP_YEARS: u32 = 30;

fn positive(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ProjectionError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, "must not be negative"));
    }
    Ok(())
}

fn fraction(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ProjectionError::invalid(field, "must be within [0, 1]"));
    }
    Ok(())
}

pub fn validate_vehicle(v: &VehicleParams) -> Result<(), ProjectionError> {
    positive("vehicle.base_price", v.base_price)?;
    if v.annual_mileage == 0 {
        return Err(ProjectionError::invalid(
            "vehicle.annual_mileage",
            "must be greater than zero",
        ));
    }
    if v.ownership_years == 0 {
        return Err(ProjectionError::invalid(
            "vehicle.ownership_years",
            "must be greater than zero",
        ));
    }
    if v.ownership_years > MAX_OWNERSHIP_YEARS {
        return Err(ProjectionError::invalid(
            "vehicle.ownership_years",
            "exceeds the maximum ownership period",
        ));
    }
    Ok(())
}

pub fn validate_market(m: &MarketParams) -> Result<(), ProjectionError> {
    non_negative("market.fuel_price", m.fuel_price)?;
    non_negative("market.electricity_rate", m.electricity_rate)?;
    fraction("market.inflation_rate", m.inflation_rate)?;
    fraction("market.revenue_growth_rate", m.revenue_growth_rate)?;
    Ok(())
}

pub fn validate_user_growth(u: &UserGrowthParams) -> Result<(), ProjectionError> {
    fraction("user_growth.growth_rate", u.growth_rate)?;
    fraction("user_growth.churn_rate", u.churn_rate)?;
    fraction("user_growth.engagement_factor", u.engagement_factor)?;
    non_negative("user_growth.revenue_per_user", u.revenue_per_user)?;
    Ok(())
}

/// 입력 레코드 전체를 검증한다. 첫 번째로 발견된 오류를 반환하며 입력은 변경하지 않는다.
///
/// 열거형과 정수형 필드(파트너 수, 초기 사용자 수)는 타입 자체로 범위가 보장된다.
pub fn validate(input: &ProjectionInput) -> Result<(), ProjectionError> {
    validate_vehicle(&input.vehicle)?;
    validate_market(&input.market)?;
    if let Some(u) = &input.user_growth {
        validate_user_growth(u)?;
    }
    Ok(())
}
