//! Regression tests for the closed-form call price.
//!
//! Reference values were computed independently from the textbook
//! Black-Scholes-Merton formula in double precision.

use approx::assert_relative_eq;
use pricer_core::analytical::{bsm_call_price, BlackScholesMerton};
use pricer_core::types::ModelParameters;
use proptest::prelude::*;

#[test]
fn test_reference_prices() {
    // (spot, strike, vol, rate, maturity, dividend, expected)
    let cases = [
        (100.0, 100.0, 0.2, 0.05, 1.0, 0.0, 10.450583572185565),
        (42.0, 40.0, 0.2, 0.1, 0.5, 0.0, 4.759422392871535),
        (100.0, 110.0, 0.25, 0.05, 0.5, 0.03, 3.685965476280167),
        (
            1868.99,
            1870.0,
            0.2979,
            0.003866,
            1.0 / 52.0,
            0.0232,
            29.955791398306815,
        ),
    ];

    for (s, k, vol, r, t, q, expected) in cases {
        let price = bsm_call_price(s, k, vol, r, t, q).unwrap();
        assert_relative_eq!(price, expected, max_relative = 1e-9);
    }
}

proptest! {
    #[test]
    fn prop_call_increases_with_spot(
        spot in 50.0..150.0_f64,
        bump in 0.5..10.0_f64,
        vol in 0.05..0.8_f64,
    ) {
        let lower = bsm_call_price(spot, 100.0, vol, 0.03, 1.0, 0.01).unwrap();
        let higher = bsm_call_price(spot + bump, 100.0, vol, 0.03, 1.0, 0.01).unwrap();
        prop_assert!(higher > lower);
    }

    #[test]
    fn prop_call_increases_with_volatility(
        vol in 0.05..0.8_f64,
        bump in 0.01..0.2_f64,
    ) {
        let lower = bsm_call_price(100.0, 100.0, vol, 0.03, 1.0, 0.0).unwrap();
        let higher = bsm_call_price(100.0, 100.0, vol + bump, 0.03, 1.0, 0.0).unwrap();
        prop_assert!(higher > lower);
    }

    #[test]
    fn prop_price_is_finite_and_non_negative(
        spot in 1.0..1000.0_f64,
        strike in 1.0..1000.0_f64,
        vol in 0.01..1.5_f64,
        rate in 0.0..0.1_f64,
        maturity in 0.01..5.0_f64,
        dividend in 0.0..0.1_f64,
    ) {
        let params = ModelParameters::new(spot, strike, vol, rate, maturity, dividend).unwrap();
        let price = BlackScholesMerton::new(params).price_call();
        prop_assert!(price.is_finite());
        prop_assert!(price >= -1e-9);
    }
}
