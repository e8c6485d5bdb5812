use india_gdp::format::{
    USD_TO_INR, format_axis_tick, format_growth, format_inr, format_usd_billions,
};

#[test]
fn trillion_branch_rounds_to_two_decimals() {
    // 15 billion USD * 75 = 1125 billion INR
    assert_eq!(format_inr(15.0), "₹1.13 Trillion");
    assert_eq!(format_inr(3549.918918778), "₹266.24 Trillion");
}

#[test]
fn threshold_is_inclusive() {
    let exactly = 1000.0 / USD_TO_INR;
    assert_eq!(format_inr(exactly), "₹1.00 Trillion");
}

#[test]
fn below_threshold_has_no_fraction_digits() {
    assert_eq!(format_inr(1.0), "₹75");
    assert_eq!(format_inr(0.0), "₹0");
    // 13.3 * 75 = 997.5, rounds half away from zero
    assert_eq!(format_inr(13.3), "₹998");
}

#[test]
fn rounding_up_to_threshold_stays_in_whole_rupees() {
    // 13.33 * 75 = 999.75, below the switch, rounds to 1000
    assert_eq!(format_inr(13.33), "₹1,000");
}

#[test]
fn negative_values_keep_their_sign() {
    assert_eq!(format_inr(-1.0), "-₹75");
}

#[test]
fn whole_rupees_use_indian_grouping() {
    // Negative values never take the Trillion branch.
    assert_eq!(format_inr(-1000.0), "-₹75,000");
    assert_eq!(format_inr(-10000.0), "-₹7,50,000");
    assert_eq!(format_inr(-200000.0), "-₹1,50,00,000");
}

#[test]
fn dollar_and_axis_labels() {
    assert_eq!(format_usd_billions(3549.918918778), "$3549.9B");
    assert_eq!(format_usd_billions(1.0), "$1.0B");
    assert_eq!(format_axis_tick(0.0), "₹0B");
    assert_eq!(format_axis_tick(1500.0), "₹1500B");
}

#[test]
fn growth_carries_direction_arrow() {
    assert_eq!(format_growth(5.86), "5.86% ↑");
    assert_eq!(format_growth(0.0), "0.00% ↑");
    assert_eq!(format_growth(-5.67), "-5.67% ↓");
}
