use vehicle_tco_toolbox::tco::validate::MAX_OWNERSHIP_YEARS;
use vehicle_tco_toolbox::tco::{
    self, validate, PartnershipTier, ProjectionInput, UserGrowthParams, VehicleType,
};
use vehicle_tco_toolbox::ProjectionError;

fn invalid_field(input: &ProjectionInput) -> &'static str {
    match validate(input) {
        Err(ProjectionError::InvalidParameter { field, .. }) => field,
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn default_input_is_valid() {
    assert_eq!(validate(&ProjectionInput::default()), Ok(()));
}

#[test]
fn rejects_non_positive_vehicle_fields() {
    let mut input = ProjectionInput::default();
    input.vehicle.base_price = 0.0;
    assert_eq!(invalid_field(&input), "vehicle.base_price");

    let mut input = ProjectionInput::default();
    input.vehicle.base_price = f64::NAN;
    assert_eq!(invalid_field(&input), "vehicle.base_price");

    let mut input = ProjectionInput::default();
    input.vehicle.annual_mileage = 0;
    assert_eq!(invalid_field(&input), "vehicle.annual_mileage");

    let mut input = ProjectionInput::default();
    input.vehicle.ownership_years = 0;
    assert_eq!(invalid_field(&input), "vehicle.ownership_years");

    let mut input = ProjectionInput::default();
    input.vehicle.ownership_years = 31;
    assert_eq!(invalid_field(&input), "vehicle.ownership_years");
}

#[test]
fn rejects_out_of_range_market_rates() {
    let mut input = ProjectionInput::default();
    input.market.fuel_price = -0.01;
    assert_eq!(invalid_field(&input), "market.fuel_price");

    let mut input = ProjectionInput::default();
    input.market.electricity_rate = f64::INFINITY;
    assert_eq!(invalid_field(&input), "market.electricity_rate");

    let mut input = ProjectionInput::default();
    input.market.inflation_rate = 1.5;
    assert_eq!(invalid_field(&input), "market.inflation_rate");

    let mut input = ProjectionInput::default();
    input.market.revenue_growth_rate = -0.1;
    assert_eq!(invalid_field(&input), "market.revenue_growth_rate");
}

#[test]
fn zero_prices_are_allowed() {
    let mut input = ProjectionInput::default();
    input.market.fuel_price = 0.0;
    input.market.electricity_rate = 0.0;
    input.partnership.partner_count = 0;
    assert_eq!(validate(&input), Ok(()));
}

#[test]
fn rejects_user_growth_rates_outside_unit_interval() {
    let mut input = ProjectionInput::default();
    input.user_growth = Some(UserGrowthParams {
        churn_rate: 1.2,
        ..UserGrowthParams::default()
    });
    assert_eq!(invalid_field(&input), "user_growth.churn_rate");

    input.user_growth = Some(UserGrowthParams {
        growth_rate: -0.5,
        ..UserGrowthParams::default()
    });
    assert_eq!(invalid_field(&input), "user_growth.growth_rate");

    input.user_growth = Some(UserGrowthParams {
        engagement_factor: 1.01,
        ..UserGrowthParams::default()
    });
    assert_eq!(invalid_field(&input), "user_growth.engagement_factor");

    input.user_growth = Some(UserGrowthParams {
        revenue_per_user: -1.0,
        ..UserGrowthParams::default()
    });
    assert_eq!(invalid_field(&input), "user_growth.revenue_per_user");
}

#[test]
fn project_returns_error_without_partial_result() {
    let mut input = ProjectionInput::default();
    input.vehicle.annual_mileage = 0;
    let err = tco::project(&input).expect_err("invalid mileage");
    assert_eq!(
        err.to_string(),
        "invalid parameter `vehicle.annual_mileage`: must be greater than zero"
    );
}

#[test]
fn parses_vehicle_type_aliases() {
    for (text, expected) in [
        ("EV", VehicleType::ElectricVehicle),
        ("Electric Vehicle", VehicleType::ElectricVehicle),
        ("electric_vehicle", VehicleType::ElectricVehicle),
        ("hybrid", VehicleType::Hybrid),
        ("Gasoline", VehicleType::Gasoline),
        ("petrol", VehicleType::Gasoline),
        (" DIESEL ", VehicleType::Diesel),
    ] {
        assert_eq!(text.parse::<VehicleType>(), Ok(expected), "{text}");
    }
    for t in VehicleType::ALL {
        assert_eq!(t.as_str().parse::<VehicleType>(), Ok(t));
    }
}

#[test]
fn rejects_unknown_enumeration_strings() {
    assert_eq!(
        "hovercraft".parse::<VehicleType>(),
        Err(ProjectionError::UnsupportedVehicleType("hovercraft".into()))
    );
    assert_eq!(
        "Gold".parse::<PartnershipTier>(),
        Err(ProjectionError::UnsupportedTier("Gold".into()))
    );
    assert_eq!("enterprise".parse::<PartnershipTier>(), Ok(PartnershipTier::Enterprise));
}

#[test]
fn ownership_cap_follows_constant() {
    let mut input = ProjectionInput::default();
    input.vehicle.ownership_years = MAX_OWNERSHIP_YEARS;
    assert_eq!(validate(&input), Ok(()));

    input.vehicle.ownership_years = MAX_OWNERSHIP_YEARS + 1;
    assert_eq!(
        validate(&input).expect_err("too long").to_string(),
        "invalid parameter `vehicle.ownership_years`: exceeds the maximum ownership period"
    );
}
