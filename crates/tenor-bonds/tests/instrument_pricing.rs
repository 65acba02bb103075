//! End-to-end pricing flows across the curve, solver, and instrument layers.

use approx::assert_relative_eq;
use tenor_analytics::sensitivity;
use tenor_bonds::{Bond, EuropeanBondOption};
use tenor_core::{Compounding, DayCount, OptionType};
use tenor_curves::{DiscountCurve, ZeroQuote};

fn bootstrapped_curve() -> DiscountCurve {
    let quotes = vec![
        ZeroQuote::new(0.5, 0.985).unwrap(),
        ZeroQuote::new(1.0, 0.968).unwrap(),
        ZeroQuote::new(2.0, 0.934).unwrap(),
        ZeroQuote::new(5.0, 0.840).unwrap(),
        ZeroQuote::new(10.0, 0.700).unwrap(),
    ];
    DiscountCurve::bootstrapped(quotes).unwrap()
}

#[test]
fn bond_priced_off_bootstrapped_curve_solves_back_to_consistent_yield() {
    let curve = bootstrapped_curve();
    let bond = Bond::new(100.0, 0.05, 2, 5.0).unwrap();

    let price = bond.price(&curve).unwrap();
    assert!(price > 0.0 && price < 130.0);

    let solved = bond
        .yield_from_price(price, Compounding::SemiAnnual)
        .unwrap();
    assert!(solved.converged());

    // The solved flat yield must reprice the bond exactly
    let repriced = sensitivity::price(bond.cash_flows(), solved.root, Compounding::SemiAnnual);
    assert_relative_eq!(repriced, price, epsilon = 1e-9);
}

#[test]
fn yield_round_trip_at_six_percent_semi_annual() {
    let bond = Bond::new(100.0, 0.05, 2, 5.0).unwrap();
    let price = sensitivity::price(bond.cash_flows(), 0.06, Compounding::SemiAnnual);

    let solved = bond
        .yield_from_price(price, Compounding::SemiAnnual)
        .unwrap();
    assert_relative_eq!(solved.root, 0.06, epsilon = 1e-6);
}

#[test]
fn risk_measures_are_consistent_on_a_flat_curve() {
    let curve = DiscountCurve::flat(0.05, Compounding::SemiAnnual, DayCount::Act365F).unwrap();
    let bond = Bond::new(100.0, 0.05, 2, 10.0).unwrap();

    let price = bond.price(&curve).unwrap();
    let duration = bond.modified_duration(&curve, Compounding::SemiAnnual).unwrap();
    let dv01 = bond.dv01(&curve, Compounding::SemiAnnual).unwrap();

    assert_relative_eq!(dv01, duration * price * 1e-4, epsilon = 1e-6);
    assert!(bond.convexity(&curve, Compounding::SemiAnnual).unwrap() > duration);
}

#[test]
fn bond_option_black_and_mc_agree_on_bootstrapped_curve() {
    let curve = bootstrapped_curve();
    let expiry = 1.0;
    let strike = curve.forward_bond_price(expiry + 5.0).unwrap();
    let vol = 0.15;

    for option_type in [OptionType::Call, OptionType::Put] {
        let option = EuropeanBondOption::new(option_type, strike, expiry);
        let black = option.price_black(&curve, vol).unwrap();
        let mc = option.price_mc(&curve, vol, 1_000_000).unwrap();
        assert_relative_eq!(mc, black, epsilon = 2e-3);
    }
}
