//! 계산 결과를 콘솔 텍스트 또는 TOML로 출력한다.

use crate::i18n::{keys, Translator};
use crate::tco::{Projection, Recommendation};

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// 천 단위 구분 기호가 들어간 금액 문자열. 소수 둘째 자리에서 반올림한다.
pub fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn recommendation_key(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::RaisePartnerCount => keys::REC_RAISE_PARTNERS,
        Recommendation::ExpandDataIntegrations => keys::REC_DATA_INTEGRATIONS,
        Recommendation::ExpandInsurancePartnerships => keys::REC_INSURANCE,
        Recommendation::ReduceChurn => keys::REC_CHURN,
        Recommendation::WellBalanced => keys::REC_BALANCED,
    }
}

/// 연도별 표, 집계, 항목별 비용, 손익분기, 권고사항을 텍스트로 만든다.
pub fn render_text(p: &Projection, tr: &Translator) -> String {
    let mut out = Vec::new();
    out.push(tr.t(keys::REPORT_HEADING).to_string());
    out.push(format!("{} / {}", p.vehicle_type, p.tier));
    out.push(tr.t(keys::REPORT_TABLE_HEADER).to_string());
    for y in &p.years {
        let cost = y.cost.total();
        let revenue = y.revenue.total();
        out.push(format!(
            "{:>4} {:>13} {:>13} {:>13}",
            y.year,
            format_money(cost),
            format_money(revenue),
            format_money(revenue - cost)
        ));
    }

    let s = &p.summary;
    out.push(String::new());
    out.push(format!("{} {}", tr.t(keys::REPORT_TOTAL_TCO), format_money(s.total_tco)));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_TCO_PER_MILE),
        format_money(p.tco_per_mile())
    ));
    out.push(format!(
        "{} {}",
        tr.t(keys::REPORT_TOTAL_REVENUE),
        format_money(s.total_revenue)
    ));
    out.push(format!(
        "{} {:.1}%",
        tr.t(keys::REPORT_REVENUE_GROWTH),
        p.revenue_growth_pct()
    ));
    out.push(format!("{} {}", tr.t(keys::REPORT_NET_PROFIT), format_money(s.net_profit)));
    match s.roi {
        Some(roi) => out.push(format!("{} {:.1}%", tr.t(keys::REPORT_ROI), roi * 100.0)),
        None => out.push(format!(
            "{} {}",
            tr.t(keys::REPORT_ROI),
            tr.t(keys::REPORT_ROI_UNDEFINED)
        )),
    }

    let totals = p.cost_totals();
    out.push(String::new());
    out.push(tr.t(keys::REPORT_COST_BREAKDOWN).to_string());
    for (key, value) in [
        (keys::COST_DEPRECIATION, totals.depreciation),
        (keys::COST_ENERGY, totals.energy()),
        (keys::COST_MAINTENANCE, totals.maintenance),
        (keys::COST_INSURANCE, totals.insurance),
        (keys::COST_REGISTRATION, totals.registration),
    ] {
        out.push(format!("  {:<18} {:>13}", tr.t(key), format_money(value)));
    }

    let be = p.break_even();
    out.push(String::new());
    match be.break_even_months {
        Some(months) => out.push(format!(
            "{} {months:.1} {}",
            tr.t(keys::REPORT_BREAK_EVEN),
            tr.t(keys::REPORT_MONTHS_UNIT)
        )),
        None => out.push(format!(
            "{} {}",
            tr.t(keys::REPORT_BREAK_EVEN),
            tr.t(keys::REPORT_NOT_PROFITABLE)
        )),
    }

    out.push(String::new());
    out.push(tr.t(keys::REPORT_RECOMMENDATIONS).to_string());
    for rec in p.recommendations() {
        out.push(format!("  - {}", tr.t(recommendation_key(rec))));
    }
    out.join("\n")
}

/// 계산 결과 전체를 TOML 문서로 직렬화한다.
pub fn render_toml(p: &Projection) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(p)
}
