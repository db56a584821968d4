use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// 차량 동력원 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    ElectricVehicle,
    Hybrid,
    Gasoline,
    Diesel,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::ElectricVehicle,
        VehicleType::Hybrid,
        VehicleType::Gasoline,
        VehicleType::Diesel,
    ];

    /// 설정 파일에 기록하는 표준 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::ElectricVehicle => "Electric Vehicle",
            VehicleType::Hybrid => "Hybrid",
            VehicleType::Gasoline => "Gasoline",
            VehicleType::Diesel => "Diesel",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        match key.as_str() {
            "ev" | "electric" | "electricvehicle" => Ok(VehicleType::ElectricVehicle),
            "hybrid" | "hev" => Ok(VehicleType::Hybrid),
            "gasoline" | "gas" | "petrol" => Ok(VehicleType::Gasoline),
            "diesel" => Ok(VehicleType::Diesel),
            _ => Err(ProjectionError::UnsupportedVehicleType(s.to_string())),
        }
    }
}

/// 파트너십 요금 등급. 등급마다 파트너당 수익 배수가 고정되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnershipTier {
    Basic,
    Premium,
    Enterprise,
}

impl PartnershipTier {
    pub const ALL: [PartnershipTier; 3] = [
        PartnershipTier::Basic,
        PartnershipTier::Premium,
        PartnershipTier::Enterprise,
    ];

    /// 등급별 수익 배수
    pub fn multiplier(&self) -> f64 {
        match self {
            PartnershipTier::Basic => 1.0,
            PartnershipTier::Premium => 1.5,
            PartnershipTier::Enterprise => 2.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnershipTier::Basic => "Basic",
            PartnershipTier::Premium => "Premium",
            PartnershipTier::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PartnershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartnershipTier {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(PartnershipTier::Basic),
            "premium" => Ok(PartnershipTier::Premium),
            "enterprise" => Ok(PartnershipTier::Enterprise),
            _ => Err(ProjectionError::UnsupportedTier(s.to_string())),
        }
    }
}

/// 차량 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleParams {
    pub vehicle_type: VehicleType,
    /// 구매 가격 [$]
    pub base_price: f64,
    /// 연간 주행거리 [mile/년]
    pub annual_mileage: u32,
    /// 보유 기간 [년]
    pub ownership_years: u32,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            vehicle_type: VehicleType::ElectricVehicle,
            base_price: 45_000.0,
            annual_mileage: 15_000,
            ownership_years: 5,
        }
    }
}

/// 시장 단가와 연간 상승률.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    /// 연료 단가 [$/gal]
    pub fuel_price: f64,
    /// 전기 요금 [$/kWh]
    pub electricity_rate: f64,
    /// 연간 물가상승률 (소수, 0.025 = 2.5%)
    pub inflation_rate: f64,
    /// 연간 수익 성장률 (소수)
    pub revenue_growth_rate: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            fuel_price: 3.50,
            electricity_rate: 0.12,
            inflation_rate: 0.025,
            revenue_growth_rate: 0.15,
        }
    }
}

/// 파트너십 입력값. 수익원별 채널 목록은 채널 수만큼 수익 규모를 키운다.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnershipParams {
    pub tier: PartnershipTier,
    pub partner_count: u32,
    pub service_providers: Vec<String>,
    pub insurance_partners: Vec<String>,
    pub parts_retailers: Vec<String>,
    pub fuel_partners: Vec<String>,
    pub financial_services: Vec<String>,
    pub data_providers: Vec<String>,
    pub enterprise_solutions: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn default_service_providers() -> Vec<String> {
    names(&["Jiffy Lube", "Mechanics", "Dealerships", "Tire Centers"])
}

pub fn default_insurance_partners() -> Vec<String> {
    names(&["Policy Referrals", "Claims Processing"])
}

pub fn default_parts_retailers() -> Vec<String> {
    names(&["AutoZone", "Amazon", "RockAuto"])
}

pub fn default_fuel_partners() -> Vec<String> {
    names(&["Shell", "GasBuddy"])
}

pub fn default_financial_services() -> Vec<String> {
    names(&["Plaid", "Credit Cards", "QuickBooks"])
}

pub fn default_data_providers() -> Vec<String> {
    names(&["Jato", "KBB", "CARFAX"])
}

pub fn default_enterprise_solutions() -> Vec<String> {
    names(&["Dealership SaaS", "Fleet Management"])
}

impl PartnershipParams {
    /// 기본 채널 목록으로 파트너십 입력을 만든다.
    pub fn new(tier: PartnershipTier, partner_count: u32) -> Self {
        Self {
            tier,
            partner_count,
            service_providers: default_service_providers(),
            insurance_partners: default_insurance_partners(),
            parts_retailers: default_parts_retailers(),
            fuel_partners: default_fuel_partners(),
            financial_services: default_financial_services(),
            data_providers: default_data_providers(),
            enterprise_solutions: default_enterprise_solutions(),
        }
    }
}

impl Default for PartnershipParams {
    fn default() -> Self {
        Self::new(PartnershipTier::Premium, 10)
    }
}

/// 사용자 증가 모델 입력 (선택). 비율은 모두 연 단위 소수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGrowthParams {
    pub initial_users: u32,
    pub growth_rate: f64,
    pub churn_rate: f64,
    /// 활성 사용자 비율 (0~1)
    pub engagement_factor: f64,
    /// 활성 사용자 1인당 연간 구독 수익 [$/년]
    pub revenue_per_user: f64,
}

impl Default for UserGrowthParams {
    fn default() -> Self {
        Self {
            initial_users: 1_000,
            growth_rate: 0.48,
            churn_rate: 0.12,
            engagement_factor: 0.7,
            revenue_per_user: 60.0,
        }
    }
}

/// 한 번의 계산에 쓰이는 전체 입력 레코드.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionInput {
    pub vehicle: VehicleParams,
    pub market: MarketParams,
    pub partnership: PartnershipParams,
    pub user_growth: Option<UserGrowthParams>,
}
