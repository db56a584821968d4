//! 연도별 비용/수익 계산과 집계 회귀 테스트.
use vehicle_tco_toolbox::tco::{
    self, summarize, CostBreakdown, MarketParams, PartnershipParams, PartnershipTier,
    ProjectionInput, RevenueBreakdown, UserGrowthParams, VehicleParams, VehicleType, YearlyResult,
};
use vehicle_tco_toolbox::ProjectionError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn scenario(vehicle_type: VehicleType, years: u32) -> ProjectionInput {
    ProjectionInput {
        vehicle: VehicleParams {
            vehicle_type,
            base_price: 45_000.0,
            annual_mileage: 15_000,
            ownership_years: years,
        },
        market: MarketParams::default(),
        partnership: PartnershipParams::new(PartnershipTier::Premium, 10),
        user_growth: None,
    }
}

fn cost_terms(c: &CostBreakdown) -> [f64; 6] {
    [
        c.depreciation,
        c.fuel,
        c.electricity,
        c.maintenance,
        c.insurance,
        c.registration,
    ]
}

fn revenue_terms(r: &RevenueBreakdown) -> [f64; 9] {
    [
        r.partnership_fees,
        r.service_providers,
        r.insurance_partners,
        r.parts_retailers,
        r.fuel_partners,
        r.financial_services,
        r.data_providers,
        r.enterprise_saas,
        r.user_saas,
    ]
}

#[test]
fn ev_premium_scenario_beats_gasoline_on_energy() {
    let ev = tco::project(&scenario(VehicleType::ElectricVehicle, 5)).expect("ev projection");
    let gas = tco::project(&scenario(VehicleType::Gasoline, 5)).expect("gas projection");

    assert_eq!(ev.years.len(), 5);
    let years: Vec<u32> = ev.years.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![1, 2, 3, 4, 5]);
    for y in &ev.years {
        assert!(cost_terms(&y.cost).iter().all(|v| *v >= 0.0), "year {}", y.year);
        assert_eq!(y.cost.fuel, 0.0);
    }
    for (e, g) in ev.years.iter().zip(&gas.years) {
        assert!(e.cost.energy() < g.cost.energy(), "year {}", e.year);
        assert_eq!(g.cost.electricity, 0.0);
    }
    // 1년차: 15000 mile × 0.3 kWh × $0.12, 15000 / 25 mpg × $3.50
    assert_close("ev energy y1", ev.years[0].cost.energy(), 540.0, 1e-12);
    assert_close("gas energy y1", gas.years[0].cost.energy(), 2_100.0, 1e-12);
}

#[test]
fn hand_computed_gasoline_two_years() {
    let input = ProjectionInput {
        vehicle: VehicleParams {
            vehicle_type: VehicleType::Gasoline,
            base_price: 30_000.0,
            annual_mileage: 12_000,
            ownership_years: 2,
        },
        market: MarketParams {
            inflation_rate: 0.0,
            revenue_growth_rate: 0.0,
            ..MarketParams::default()
        },
        partnership: PartnershipParams::new(PartnershipTier::Basic, 0),
        user_growth: None,
    };
    let p = tco::project(&input).expect("projection");

    let y1 = &p.years[0].cost;
    assert_close("dep1", y1.depreciation, 6_000.0, 1e-12);
    assert_close("fuel1", y1.fuel, 1_680.0, 1e-12);
    assert_close("maint1", y1.maintenance, 1_440.0, 1e-12);
    assert_close("ins1", y1.insurance, 1_500.0, 1e-12);
    assert_close("reg1", y1.registration, 450.0, 1e-12);
    assert_close("total1", y1.total(), 11_070.0, 1e-12);
    assert_close("residual1", p.years[0].residual_value, 24_000.0, 1e-12);

    let y2 = &p.years[1].cost;
    assert_close("dep2", y2.depreciation, 4_800.0, 1e-12);
    assert_close("maint2", y2.maintenance, 1_584.0, 1e-12);
    assert_close("ins2", y2.insurance, 1_200.0, 1e-12);
    assert_close("total2", y2.total(), 9_624.0, 1e-12);

    // Basic, 기준 주행거리 12000 mile: 800 + 300 + 300 + 240 + 540 + 750 + 2000
    assert_close("revenue1", p.years[0].revenue.total(), 4_930.0, 1e-12);
    assert_close("total tco", p.summary.total_tco, 20_694.0, 1e-12);
    assert_close("total revenue", p.summary.total_revenue, 9_860.0, 1e-12);
    assert_close("net", p.summary.net_profit, -10_834.0, 1e-12);
    assert_close("roi", p.summary.try_roi().expect("roi"), -10_834.0 / 20_694.0, 1e-12);
}

#[test]
fn every_term_non_negative_for_all_types_and_tiers() {
    for vehicle_type in VehicleType::ALL {
        for tier in PartnershipTier::ALL {
            let mut input = scenario(vehicle_type, 15);
            input.partnership = PartnershipParams::new(tier, 3);
            input.user_growth = Some(UserGrowthParams::default());
            let p = tco::project(&input).expect("projection");
            for y in &p.years {
                assert!(cost_terms(&y.cost).iter().all(|v| *v >= 0.0));
                assert!(revenue_terms(&y.revenue).iter().all(|v| *v >= 0.0));
                assert!(y.residual_value >= 0.0);
                assert!(y.active_users >= 0.0);
            }
        }
    }
}

#[test]
fn total_tco_matches_in_order_yearly_sum() {
    let p = tco::project(&scenario(VehicleType::Hybrid, 12)).expect("projection");
    let mut tco_sum = 0.0;
    let mut revenue_sum = 0.0;
    for y in &p.years {
        tco_sum += y.cost.total();
        revenue_sum += y.revenue.total();
    }
    assert_eq!(p.summary.total_tco, tco_sum);
    assert_eq!(p.summary.total_revenue, revenue_sum);
    assert_eq!(p.summary.net_profit, revenue_sum - tco_sum);
}

#[test]
fn residual_value_declines_and_maintenance_rises_with_age() {
    for vehicle_type in VehicleType::ALL {
        let p = tco::project(&scenario(vehicle_type, 15)).expect("projection");
        let mut prev_value = 45_000.0;
        let mut prev_maint = 0.0;
        for y in &p.years {
            assert!(y.residual_value <= prev_value, "{vehicle_type} year {}", y.year);
            assert!(y.cost.maintenance >= prev_maint, "{vehicle_type} year {}", y.year);
            prev_value = y.residual_value;
            prev_maint = y.cost.maintenance;
        }
    }
}

#[test]
fn zero_partners_only_removes_partnership_fees() {
    let with = tco::project(&scenario(VehicleType::ElectricVehicle, 5)).expect("with partners");
    let mut input = scenario(VehicleType::ElectricVehicle, 5);
    input.partnership.partner_count = 0;
    let without = tco::project(&input).expect("without partners");

    for (a, b) in with.years.iter().zip(&without.years) {
        assert_eq!(b.revenue.partnership_fees, 0.0);
        assert!(a.revenue.partnership_fees > 0.0);
        assert_eq!(revenue_terms(&a.revenue)[1..], revenue_terms(&b.revenue)[1..]);
        assert_eq!(a.cost, b.cost);
    }
}

#[test]
fn single_year_summary_equals_that_year() {
    let p = tco::project(&scenario(VehicleType::Diesel, 1)).expect("projection");
    assert_eq!(p.years.len(), 1);
    let y = &p.years[0];
    assert_eq!(p.summary.total_tco, y.cost.total());
    assert_eq!(p.summary.total_revenue, y.revenue.total());
    assert_eq!(p.summary.net_profit, y.revenue.total() - y.cost.total());
    assert_eq!(p.revenue_growth_pct(), 0.0);
}

#[test]
fn first_year_has_no_growth_applied() {
    let mut input = scenario(VehicleType::Gasoline, 3);
    input.market.inflation_rate = 0.10;
    let p = tco::project(&input).expect("projection");
    assert_close("fuel y1", p.years[0].cost.fuel, 2_100.0, 1e-12);
    assert_close("fuel y2", p.years[1].cost.fuel, 2_310.0, 1e-12);
    assert_close("fuel y3", p.years[2].cost.fuel, 2_541.0, 1e-12);
    // Premium 10곳 × $1000 × 1.5
    assert_close("fees y1", p.years[0].revenue.partnership_fees, 15_000.0, 1e-12);
    assert_close("fees y2", p.years[1].revenue.partnership_fees, 17_250.0, 1e-12);
}

#[test]
fn depreciation_ignores_inflation() {
    let mut flat = scenario(VehicleType::Hybrid, 4);
    flat.market.inflation_rate = 0.0;
    let mut inflated = flat.clone();
    inflated.market.inflation_rate = 0.08;
    let a = tco::project(&flat).expect("flat");
    let b = tco::project(&inflated).expect("inflated");
    for (x, y) in a.years.iter().zip(&b.years) {
        assert_eq!(x.cost.depreciation, y.cost.depreciation);
        assert_eq!(x.residual_value, y.residual_value);
    }
}

#[test]
fn user_saas_follows_growth_curve() {
    let mut input = scenario(VehicleType::ElectricVehicle, 3);
    input.user_growth = Some(UserGrowthParams {
        initial_users: 1_000,
        growth_rate: 0.0,
        churn_rate: 0.0,
        engagement_factor: 0.5,
        revenue_per_user: 60.0,
    });
    let p = tco::project(&input).expect("projection");
    let users: Vec<f64> = p.years.iter().map(|y| y.active_users).collect();
    assert_eq!(users, vec![500.0, 250.0, 125.0]);
    assert_close("saas y1", p.years[0].revenue.user_saas, 30_000.0, 1e-12);
    assert_close("saas y3", p.years[2].revenue.user_saas, 7_500.0, 1e-12);

    let without = tco::project(&scenario(VehicleType::ElectricVehicle, 3)).expect("no users");
    assert!(without.years.iter().all(|y| y.revenue.user_saas == 0.0));
    assert!(without.years.iter().all(|y| y.active_users == 0.0));
}

#[test]
fn roi_undefined_only_when_total_tco_is_zero() {
    let empty = summarize(&[]);
    assert_eq!(empty.roi, None);
    assert_eq!(empty.try_roi(), Err(ProjectionError::DivisionByZero));

    let revenue_only = YearlyResult {
        year: 1,
        residual_value: 0.0,
        active_users: 0.0,
        cost: CostBreakdown::default(),
        revenue: RevenueBreakdown {
            partnership_fees: 1_000.0,
            ..RevenueBreakdown::default()
        },
    };
    let s = summarize(&[revenue_only]);
    assert_eq!(s.total_revenue, 1_000.0);
    assert_eq!(s.try_roi(), Err(ProjectionError::DivisionByZero));

    let p = tco::project(&scenario(VehicleType::Gasoline, 5)).expect("projection");
    let roi = p.summary.try_roi().expect("defined roi");
    assert_close("roi", roi, p.summary.net_profit / p.summary.total_tco, 1e-12);
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let mut input = scenario(VehicleType::Hybrid, 7);
    input.user_growth = Some(UserGrowthParams::default());
    let a = tco::project(&input).expect("first");
    let b = tco::project(&input).expect("second");
    assert_eq!(a, b);
}

#[test]
fn tier_multiplier_scales_channel_revenue() {
    let mut basic = scenario(VehicleType::Gasoline, 2);
    basic.partnership = PartnershipParams::new(PartnershipTier::Basic, 4);
    let mut enterprise = basic.clone();
    enterprise.partnership.tier = PartnershipTier::Enterprise;
    let a = tco::project(&basic).expect("basic");
    let b = tco::project(&enterprise).expect("enterprise");
    assert_close(
        "enterprise/basic",
        b.summary.total_revenue / a.summary.total_revenue,
        2.5,
        1e-12,
    );
}
