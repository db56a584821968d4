use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::tco::{self, PartnershipTier, VehicleType};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunProjection,
    Vehicle,
    Market,
    Partnership,
    UserGrowth,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면(EOF) 종료로 취급한다.
pub fn main_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_RUN,
        keys::MAIN_MENU_VEHICLE,
        keys::MAIN_MENU_MARKET,
        keys::MAIN_MENU_PARTNERSHIP,
        keys::MAIN_MENU_USER_GROWTH,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let Some(sel) = read_line(input, tr.t(keys::PROMPT_MENU_SELECT))? else {
            println!();
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunProjection),
            "2" => return Ok(MenuChoice::Vehicle),
            "3" => return Ok(MenuChoice::Market),
            "4" => return Ok(MenuChoice::Partnership),
            "5" => return Ok(MenuChoice::UserGrowth),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 현재 설정으로 계산을 실행하고 보고서를 출력한다.
/// 입력 오류는 메뉴를 종료하지 않고 메시지만 출력한다.
pub fn handle_run(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let result = cfg
        .scenario
        .to_input()
        .and_then(|input| tco::project(&input));
    match result {
        Ok(projection) => println!("{}", report::render_text(&projection, tr)),
        Err(err) => {
            log::warn!("projection rejected: {err}");
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        }
    }
    Ok(())
}

/// 차량 설정 메뉴를 처리한다.
pub fn handle_vehicle(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VEHICLE_HEADING));
    println!("{}", tr.t(keys::KEEP_HINT));
    println!("{}", tr.t(keys::VEHICLE_TYPE_OPTIONS));
    let v = &mut cfg.scenario.vehicle;
    let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_SELECT), v.vehicle_type);
    let sel = read_line(input, &prompt)?.unwrap_or_default();
    let picked = match sel.trim() {
        "" => None,
        "1" => Some(VehicleType::ElectricVehicle),
        "2" => Some(VehicleType::Hybrid),
        "3" => Some(VehicleType::Gasoline),
        "4" => Some(VehicleType::Diesel),
        other => match VehicleType::from_str(other) {
            Ok(t) => Some(t),
            Err(_) => {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                None
            }
        },
    };
    if let Some(t) = picked {
        v.vehicle_type = t.as_str().to_string();
    }
    v.base_price = read_or_keep(tr, input, keys::PROMPT_BASE_PRICE, v.base_price)?;
    v.annual_mileage = read_or_keep(tr, input, keys::PROMPT_MILEAGE, v.annual_mileage)?;
    v.ownership_years = read_or_keep(tr, input, keys::PROMPT_YEARS, v.ownership_years)?;
    Ok(())
}

/// 시장 단가 메뉴를 처리한다.
pub fn handle_market(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MARKET_HEADING));
    println!("{}", tr.t(keys::KEEP_HINT));
    let m = &mut cfg.scenario.market;
    m.fuel_price = read_or_keep(tr, input, keys::PROMPT_FUEL_PRICE, m.fuel_price)?;
    m.electricity_rate =
        read_or_keep(tr, input, keys::PROMPT_ELECTRICITY_RATE, m.electricity_rate)?;
    m.inflation_rate = read_or_keep(tr, input, keys::PROMPT_INFLATION, m.inflation_rate)?;
    m.revenue_growth_rate =
        read_or_keep(tr, input, keys::PROMPT_REVENUE_GROWTH, m.revenue_growth_rate)?;
    Ok(())
}

/// 파트너십 메뉴를 처리한다.
pub fn handle_partnership(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PARTNERSHIP_HEADING));
    println!("{}", tr.t(keys::KEEP_HINT));
    println!("{}", tr.t(keys::TIER_OPTIONS));
    let p = &mut cfg.scenario.partnership;
    let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_SELECT), p.tier);
    let sel = read_line(input, &prompt)?.unwrap_or_default();
    let picked = match sel.trim() {
        "" => None,
        "1" => Some(PartnershipTier::Basic),
        "2" => Some(PartnershipTier::Premium),
        "3" => Some(PartnershipTier::Enterprise),
        other => match PartnershipTier::from_str(other) {
            Ok(tier) => Some(tier),
            Err(_) => {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                None
            }
        },
    };
    if let Some(tier) = picked {
        p.tier = tier.as_str().to_string();
    }
    p.partner_count = read_or_keep(tr, input, keys::PROMPT_PARTNER_COUNT, p.partner_count)?;
    Ok(())
}

/// 사용자 증가 모델 메뉴를 처리한다. 사용 안 함을 고르면 구독 수익이 0이 된다.
pub fn handle_user_growth(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::USER_GROWTH_HEADING));
    println!("{}", tr.t(keys::USER_GROWTH_OPTIONS));
    let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?.unwrap_or_default();
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::KEEP_HINT));
            let mut u = cfg.scenario.user_growth.clone().unwrap_or_default();
            u.initial_users = read_or_keep(tr, input, keys::PROMPT_INITIAL_USERS, u.initial_users)?;
            u.growth_rate = read_or_keep(tr, input, keys::PROMPT_GROWTH_RATE, u.growth_rate)?;
            u.churn_rate = read_or_keep(tr, input, keys::PROMPT_CHURN_RATE, u.churn_rate)?;
            u.engagement_factor = read_or_keep(tr, input, keys::PROMPT_ENGAGEMENT, u.engagement_factor)?;
            u.revenue_per_user = read_or_keep(tr, input, keys::PROMPT_REVENUE_PER_USER, u.revenue_per_user)?;
            cfg.scenario.user_growth = Some(u);
        }
        "2" => cfg.scenario.user_growth = None,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::SETTINGS_PROMPT_CHANGE))?.unwrap_or_default();
    let lang = match sel.trim() {
        "" => return Ok(false),
        "1" => "ko",
        "2" => "en",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(true)
}

/// 한 줄을 읽는다. 입력 스트림이 닫혔으면 None.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// 숫자를 입력받는다. 빈 입력이나 EOF면 현재값을 그대로 돌려준다.
fn read_or_keep<T>(
    tr: &Translator,
    input: &mut impl BufRead,
    prompt_key: &str,
    current: T,
) -> Result<T, AppError>
where
    T: FromStr + std::fmt::Display + Copy,
{
    loop {
        let Some(s) = read_line(input, &format!("{}[{current}] ", tr.t(prompt_key)))? else {
            return Ok(current);
        };
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
