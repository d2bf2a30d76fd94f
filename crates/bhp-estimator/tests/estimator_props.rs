use bhp_estimator::{
    generate_history_from, FeatureWeights, HeuristicEstimator, PredictionRequest, PropertyType,
    MONTH_NAMES,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn known_location() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Whitefield"),
        Just("Electronic City"),
        Just("Indiranagar"),
        Just("Koramangala"),
        Just("Jayanagar"),
        Just("Marathahalli"),
        Just("HSR Layout"),
    ]
}

fn property_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::Villa),
        Just(PropertyType::IndependentHouse),
        Just(PropertyType::BuilderFloor),
        Just(PropertyType::Plot),
    ]
}

proptest! {
    #[test]
    fn prop_price_is_positive_multiple_of_thousand(
        area in f64::MIN_POSITIVE..1e6f64,
        location in known_location(),
        bedrooms in 1..=5u8,
        bathrooms in 1..=4u8,
        ty in property_type(),
    ) {
        let estimator = HeuristicEstimator::default();
        let request = PredictionRequest::new(area, location, bedrooms, bathrooms)
            .unwrap()
            .with_property_type(ty);

        let price = estimator.estimate_request(&request);
        prop_assert!(price > 0.0);
        prop_assert_eq!(price % 1000.0, 0.0);
    }

    #[test]
    fn prop_estimate_is_deterministic(
        area in 1.0..10_000.0f64,
        location in ".{0,20}",
        bedrooms in "[0-9]",
        bathrooms in "[0-9]",
    ) {
        let estimator = HeuristicEstimator::default();
        let a = estimator.estimate(area, &location, &bedrooms, &bathrooms, "Villa");
        let b = estimator.estimate(area, &location, &bedrooms, &bathrooms, "Villa");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_recognized_keys_use_exact_factor(location in known_location(), ty in property_type()) {
        let weights = FeatureWeights::default();
        let estimator = HeuristicEstimator::new(weights.clone());
        let b = estimator.breakdown(1000.0, location, "3", "2", ty.as_str());

        prop_assert!(weights.location.contains(location));
        prop_assert_eq!(b.location_factor, weights.location.lookup(location));
        prop_assert_eq!(b.property_type_factor, weights.property_type.lookup(ty.as_str()));
    }

    #[test]
    fn prop_unrecognized_keys_use_default(location in "[a-z]{12}") {
        let weights = FeatureWeights::default();
        let estimator = HeuristicEstimator::new(weights.clone());
        let b = estimator.breakdown(1000.0, &location, "0", "9", "Castle");

        prop_assert_eq!(b.location_factor, weights.location.default_factor());
        prop_assert_eq!(b.bedroom_factor, weights.bedrooms.default_factor());
        prop_assert_eq!(b.bathroom_factor, weights.bathrooms.default_factor());
        prop_assert_eq!(b.property_type_factor, weights.property_type.default_factor());
    }

    #[test]
    fn prop_history_is_contiguous_backward_run(
        price in 1.0..1e9f64,
        month in 0..12u32,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let history = generate_history_from(price, 6, month, &mut rng);
        prop_assert_eq!(history.len(), 6);
        prop_assert_eq!(history[5].month, MONTH_NAMES[month as usize]);

        let index = |m: &str| MONTH_NAMES.iter().position(|n| *n == m).unwrap();
        for pair in history.windows(2) {
            prop_assert_eq!((index(pair[0].month) + 1) % 12, index(pair[1].month));
        }
        for point in &history {
            prop_assert!(point.price >= 0.0);
            prop_assert!((point.price - price).abs() <= price * 0.1);
        }
    }
}

#[test]
fn unknown_location_is_cheaper_than_koramangala() {
    let estimator = HeuristicEstimator::default();
    let koramangala = estimator.estimate(1200.0, "Koramangala", "2", "2", "Apartment");
    let nowhere = estimator.estimate(1200.0, "Nowhere", "2", "2", "Apartment");
    assert_eq!(koramangala, 11_466_000.0);
    assert!(nowhere < koramangala);
}
