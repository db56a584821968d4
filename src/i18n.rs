use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const KEEP_HINT: &str = "general.keep_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_VEHICLE: &str = "main_menu.vehicle";
    pub const MAIN_MENU_MARKET: &str = "main_menu.market";
    pub const MAIN_MENU_PARTNERSHIP: &str = "main_menu.partnership";
    pub const MAIN_MENU_USER_GROWTH: &str = "main_menu.user_growth";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const VEHICLE_HEADING: &str = "vehicle.heading";
    pub const VEHICLE_TYPE_OPTIONS: &str = "vehicle.type_options";
    pub const PROMPT_BASE_PRICE: &str = "vehicle.prompt_base_price";
    pub const PROMPT_MILEAGE: &str = "vehicle.prompt_mileage";
    pub const PROMPT_YEARS: &str = "vehicle.prompt_years";

    pub const MARKET_HEADING: &str = "market.heading";
    pub const PROMPT_FUEL_PRICE: &str = "market.prompt_fuel_price";
    pub const PROMPT_ELECTRICITY_RATE: &str = "market.prompt_electricity_rate";
    pub const PROMPT_INFLATION: &str = "market.prompt_inflation";
    pub const PROMPT_REVENUE_GROWTH: &str = "market.prompt_revenue_growth";

    pub const PARTNERSHIP_HEADING: &str = "partnership.heading";
    pub const TIER_OPTIONS: &str = "partnership.tier_options";
    pub const PROMPT_PARTNER_COUNT: &str = "partnership.prompt_partner_count";

    pub const USER_GROWTH_HEADING: &str = "user_growth.heading";
    pub const USER_GROWTH_OPTIONS: &str = "user_growth.options";
    pub const PROMPT_INITIAL_USERS: &str = "user_growth.prompt_initial_users";
    pub const PROMPT_GROWTH_RATE: &str = "user_growth.prompt_growth_rate";
    pub const PROMPT_CHURN_RATE: &str = "user_growth.prompt_churn_rate";
    pub const PROMPT_ENGAGEMENT: &str = "user_growth.prompt_engagement";
    pub const PROMPT_REVENUE_PER_USER: &str = "user_growth.prompt_revenue_per_user";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_TABLE_HEADER: &str = "report.table_header";
    pub const REPORT_TOTAL_TCO: &str = "report.total_tco";
    pub const REPORT_TCO_PER_MILE: &str = "report.tco_per_mile";
    pub const REPORT_TOTAL_REVENUE: &str = "report.total_revenue";
    pub const REPORT_REVENUE_GROWTH: &str = "report.revenue_growth";
    pub const REPORT_NET_PROFIT: &str = "report.net_profit";
    pub const REPORT_ROI: &str = "report.roi";
    pub const REPORT_ROI_UNDEFINED: &str = "report.roi_undefined";
    pub const REPORT_COST_BREAKDOWN: &str = "report.cost_breakdown";
    pub const COST_DEPRECIATION: &str = "cost.depreciation";
    pub const COST_ENERGY: &str = "cost.energy";
    pub const COST_MAINTENANCE: &str = "cost.maintenance";
    pub const COST_INSURANCE: &str = "cost.insurance";
    pub const COST_REGISTRATION: &str = "cost.registration";
    pub const REPORT_BREAK_EVEN: &str = "report.break_even";
    pub const REPORT_MONTHS_UNIT: &str = "report.months_unit";
    pub const REPORT_NOT_PROFITABLE: &str = "report.not_profitable";
    pub const REPORT_RECOMMENDATIONS: &str = "report.recommendations";

    pub const REC_RAISE_PARTNERS: &str = "recommendation.raise_partners";
    pub const REC_DATA_INTEGRATIONS: &str = "recommendation.data_integrations";
    pub const REC_INSURANCE: &str = "recommendation.insurance";
    pub const REC_CHURN: &str = "recommendation.churn";
    pub const REC_BALANCED: &str = "recommendation.balanced";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 영어가 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn locale_language(loc: &str) -> Option<String> {
    let lang = loc.split(['.', '_', '-']).next()?.to_lowercase();
    matches!(lang.as_str(), "ko" | "en").then_some(lang)
}

/// 시스템 로케일(sys-locale, LANG, LC_ALL 순)에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .into_iter()
        .chain(
            ["LANG", "LC_ALL"]
                .into_iter()
                .filter_map(|var| std::env::var(var).ok()),
        )
        .find_map(|loc| locale_language(&loc))
}

/// `<dir>/<lang>.toml`, 없으면 `<dir>/<기본 언어>.toml` 언어팩을 읽는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let base = lang.split(['-', '_']).next().unwrap_or(lang);
    [lang, base].into_iter().find_map(|code| {
        let content = fs::read_to_string(Path::new(dir).join(format!("{code}.toml"))).ok()?;
        parse_toml_to_map(&content)
    })
}

/// 중첩 테이블은 `a.b` 형식의 키로 평탄화한다. 문자열이 아닌 값은 무시한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    flatten("", &table, &mut map);
    (!map.is_empty()).then_some(map)
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (k, v) in table {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Table(t) => flatten(&key, t, out),
            _ => {}
        }
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        KEEP_HINT => "(엔터 시 현재값 유지)",
        MAIN_MENU_TITLE => "\n=== Vehicle TCO Toolbox ===",
        MAIN_MENU_RUN => "1) TCO/수익 계산 실행",
        MAIN_MENU_VEHICLE => "2) 차량 설정",
        MAIN_MENU_MARKET => "3) 시장 단가 설정",
        MAIN_MENU_PARTNERSHIP => "4) 파트너십 설정",
        MAIN_MENU_USER_GROWTH => "5) 사용자 증가 모델",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        VEHICLE_HEADING => "\n-- 차량 설정 --",
        VEHICLE_TYPE_OPTIONS => "차종: 1=전기차 2=하이브리드 3=가솔린 4=디젤",
        PROMPT_BASE_PRICE => "구매 가격 [$]: ",
        PROMPT_MILEAGE => "연간 주행거리 [mile]: ",
        PROMPT_YEARS => "보유 기간 [년]: ",
        MARKET_HEADING => "\n-- 시장 단가 설정 --",
        PROMPT_FUEL_PRICE => "연료 단가 [$/gal]: ",
        PROMPT_ELECTRICITY_RATE => "전기 요금 [$/kWh]: ",
        PROMPT_INFLATION => "연간 물가상승률 (소수, 0.025=2.5%): ",
        PROMPT_REVENUE_GROWTH => "연간 수익 성장률 (소수): ",
        PARTNERSHIP_HEADING => "\n-- 파트너십 설정 --",
        TIER_OPTIONS => "등급: 1=Basic 2=Premium 3=Enterprise",
        PROMPT_PARTNER_COUNT => "파트너 수: ",
        USER_GROWTH_HEADING => "\n-- 사용자 증가 모델 --",
        USER_GROWTH_OPTIONS => "1) 사용/수정  2) 사용 안 함",
        PROMPT_INITIAL_USERS => "초기 사용자 수: ",
        PROMPT_GROWTH_RATE => "연간 증가율 (0~1): ",
        PROMPT_CHURN_RATE => "연간 이탈률 (0~1): ",
        PROMPT_ENGAGEMENT => "활성 비율 (0~1): ",
        PROMPT_REVENUE_PER_USER => "활성 사용자당 연간 수익 [$]: ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 자동",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 다음으로 설정되었습니다:",
        REPORT_HEADING => "\n== TCO/수익 예측 ==",
        REPORT_TABLE_HEADER => "연도        비용          수익        순이익",
        REPORT_TOTAL_TCO => "총 TCO:",
        REPORT_TCO_PER_MILE => "마일당 TCO:",
        REPORT_TOTAL_REVENUE => "총 수익:",
        REPORT_REVENUE_GROWTH => "수익 증가율:",
        REPORT_NET_PROFIT => "순이익:",
        REPORT_ROI => "ROI:",
        REPORT_ROI_UNDEFINED => "정의되지 않음 (TCO = 0)",
        REPORT_COST_BREAKDOWN => "비용 항목별 합계:",
        COST_DEPRECIATION => "감가상각",
        COST_ENERGY => "연료/전기",
        COST_MAINTENANCE => "정비",
        COST_INSURANCE => "보험",
        COST_REGISTRATION => "등록/세금",
        REPORT_BREAK_EVEN => "손익분기:",
        REPORT_MONTHS_UNIT => "개월",
        REPORT_NOT_PROFITABLE => "수익이 비용을 넘지 못해 손익분기에 도달하지 않습니다.",
        REPORT_RECOMMENDATIONS => "권고사항:",
        REC_RAISE_PARTNERS => "ROI를 높이려면 파트너 수를 늘리거나 엔터프라이즈 솔루션을 확대하세요.",
        REC_DATA_INTEGRATIONS => "데이터 제휴 수익이 서비스 제휴보다 높습니다. 데이터 연동 확대를 검토하세요.",
        REC_INSURANCE => "수익원 균형을 위해 보험 제휴를 확대하세요.",
        REC_CHURN => "참여 프로그램이나 로열티 정책으로 이탈률을 낮추세요.",
        REC_BALANCED => "현재 구성은 균형이 잡혀 있습니다. 시장 동향을 계속 점검하세요.",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        KEEP_HINT => "(press enter to keep current value)",
        MAIN_MENU_TITLE => "\n=== Vehicle TCO Toolbox ===",
        MAIN_MENU_RUN => "1) Run TCO/revenue projection",
        MAIN_MENU_VEHICLE => "2) Vehicle",
        MAIN_MENU_MARKET => "3) Market prices",
        MAIN_MENU_PARTNERSHIP => "4) Partnership",
        MAIN_MENU_USER_GROWTH => "5) User growth model",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        VEHICLE_HEADING => "\n-- Vehicle --",
        VEHICLE_TYPE_OPTIONS => "Type: 1=Electric 2=Hybrid 3=Gasoline 4=Diesel",
        PROMPT_BASE_PRICE => "Purchase price [$]: ",
        PROMPT_MILEAGE => "Annual mileage [mile]: ",
        PROMPT_YEARS => "Ownership period [years]: ",
        MARKET_HEADING => "\n-- Market prices --",
        PROMPT_FUEL_PRICE => "Fuel price [$/gal]: ",
        PROMPT_ELECTRICITY_RATE => "Electricity rate [$/kWh]: ",
        PROMPT_INFLATION => "Annual inflation (fraction, 0.025=2.5%): ",
        PROMPT_REVENUE_GROWTH => "Annual revenue growth (fraction): ",
        PARTNERSHIP_HEADING => "\n-- Partnership --",
        TIER_OPTIONS => "Tier: 1=Basic 2=Premium 3=Enterprise",
        PROMPT_PARTNER_COUNT => "Partner count: ",
        USER_GROWTH_HEADING => "\n-- User growth model --",
        USER_GROWTH_OPTIONS => "1) Enable/edit  2) Disable",
        PROMPT_INITIAL_USERS => "Initial users: ",
        PROMPT_GROWTH_RATE => "Annual growth rate (0-1): ",
        PROMPT_CHURN_RATE => "Annual churn rate (0-1): ",
        PROMPT_ENGAGEMENT => "Engagement factor (0-1): ",
        PROMPT_REVENUE_PER_USER => "Annual revenue per active user [$]: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        REPORT_HEADING => "\n== TCO / revenue projection ==",
        REPORT_TABLE_HEADER => "Year        Cost       Revenue    Net profit",
        REPORT_TOTAL_TCO => "Total TCO:",
        REPORT_TCO_PER_MILE => "TCO per mile:",
        REPORT_TOTAL_REVENUE => "Total revenue:",
        REPORT_REVENUE_GROWTH => "Revenue growth:",
        REPORT_NET_PROFIT => "Net profit:",
        REPORT_ROI => "ROI:",
        REPORT_ROI_UNDEFINED => "undefined (TCO = 0)",
        REPORT_COST_BREAKDOWN => "Cost totals by category:",
        COST_DEPRECIATION => "Depreciation",
        COST_ENERGY => "Fuel/Electricity",
        COST_MAINTENANCE => "Maintenance",
        COST_INSURANCE => "Insurance",
        COST_REGISTRATION => "Registration",
        REPORT_BREAK_EVEN => "Break-even:",
        REPORT_MONTHS_UNIT => "months",
        REPORT_NOT_PROFITABLE => "Revenue does not exceed cost; no break-even point.",
        REPORT_RECOMMENDATIONS => "Recommendations:",
        REC_RAISE_PARTNERS => "Increase partner count or expand enterprise solutions for higher ROI.",
        REC_DATA_INTEGRATIONS => "Data partnerships are outperforming service providers. Consider more data integrations.",
        REC_INSURANCE => "Expand insurance partnerships for more balanced revenue streams.",
        REC_CHURN => "Reduce churn with better engagement or loyalty programs.",
        REC_BALANCED => "Current configuration is well balanced. Monitor market trends for new opportunities.",
        _ => return None,
    })
}
