use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::ProjectionError;
use crate::tco::params::{self, *};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 차량 설정. 차종은 문자열로 기록하고 계산 직전에 enum으로 변환한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub vehicle_type: String,
    pub base_price: f64,
    pub annual_mileage: u32,
    pub ownership_years: u32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        let v = VehicleParams::default();
        Self {
            vehicle_type: v.vehicle_type.as_str().to_string(),
            base_price: v.base_price,
            annual_mileage: v.annual_mileage,
            ownership_years: v.ownership_years,
        }
    }
}

/// 파트너십 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnershipConfig {
    pub tier: String,
    pub partner_count: u32,
    pub service_providers: Vec<String>,
    pub insurance_partners: Vec<String>,
    pub parts_retailers: Vec<String>,
    pub fuel_partners: Vec<String>,
    pub financial_services: Vec<String>,
    pub data_providers: Vec<String>,
    pub enterprise_solutions: Vec<String>,
}

impl Default for PartnershipConfig {
    fn default() -> Self {
        Self {
            tier: PartnershipTier::Premium.as_str().to_string(),
            partner_count: 10,
            service_providers: params::default_service_providers(),
            insurance_partners: params::default_insurance_partners(),
            parts_retailers: params::default_parts_retailers(),
            fuel_partners: params::default_fuel_partners(),
            financial_services: params::default_financial_services(),
            data_providers: params::default_data_providers(),
            enterprise_solutions: params::default_enterprise_solutions(),
        }
    }
}

/// 계산 시나리오. `[scenario.user_growth]` 테이블이 없으면 사용자 구독 수익은 0이다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub vehicle: VehicleConfig,
    pub market: MarketParams,
    pub partnership: PartnershipConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_growth: Option<UserGrowthParams>,
}

impl ScenarioConfig {
    /// 문자열 필드를 enum으로 변환해 계산 입력을 만든다.
    pub fn to_input(&self) -> Result<ProjectionInput, ProjectionError> {
        let vehicle_type: VehicleType = self.vehicle.vehicle_type.parse()?;
        let tier: PartnershipTier = self.partnership.tier.parse()?;
        let p = &self.partnership;
        Ok(ProjectionInput {
            vehicle: VehicleParams {
                vehicle_type,
                base_price: self.vehicle.base_price,
                annual_mileage: self.vehicle.annual_mileage,
                ownership_years: self.vehicle.ownership_years,
            },
            market: self.market.clone(),
            partnership: PartnershipParams {
                tier,
                partner_count: p.partner_count,
                service_providers: p.service_providers.clone(),
                insurance_partners: p.insurance_partners.clone(),
                parts_retailers: p.parts_retailers.clone(),
                fuel_partners: p.fuel_partners.clone(),
                financial_services: p.financial_services.clone(),
                data_providers: p.data_providers.clone(),
                enterprise_solutions: p.enterprise_solutions.clone(),
            },
            user_growth: self.user_growth.clone(),
        })
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (ko, en, auto)
    pub language: String,
    /// 외부 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    pub scenario: ScenarioConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            scenario: ScenarioConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        log::info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
