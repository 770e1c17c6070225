//! Integration tests for the public forecasting entry points

use sa_native::{
    predict, predict_static, ForecastConfig, ForecastError, ForecastPolicy, Forecaster,
    InvalidInputCause,
};

#[test]
fn test_predict_static_basic() {
    let result = predict_static(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
    assert_eq!(result, vec![5.0, 5.0, 5.0]);
}

#[test]
fn test_predict_static_single_value() {
    assert_eq!(predict_static(&[42.0], 2).unwrap(), vec![42.0, 42.0]);
    assert_eq!(predict_static(&[42.0], 5).unwrap(), vec![42.0; 5]);
}

#[test]
fn test_predict_static_larger_horizon() {
    let result = predict_static(&[10.0, 20.0, 30.0], 5).unwrap();
    assert_eq!(result, vec![30.0, 30.0, 30.0, 30.0, 30.0]);
}

#[test]
fn test_predict_static_large_horizon() {
    let result = predict_static(&[10.0, 20.0, 30.0], 100).unwrap();
    assert_eq!(result.len(), 100);
    assert!(result.iter().all(|&x| x == 30.0));
}

#[test]
fn test_predict_static_empty_data() {
    let err = predict_static(&[], 3).unwrap_err();
    assert_eq!(err, ForecastError::InvalidInput(InvalidInputCause::EmptySeries));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_predict_static_zero_horizon() {
    let err = predict_static(&[1.0, 2.0], 0).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InvalidInput(InvalidInputCause::NonPositiveHorizon { horizon: 0 })
    ));
    assert!(err.to_string().contains("non-positive horizon"));
}

#[test]
fn test_predict_static_negative_horizon() {
    let err = predict_static(&[1.0, 2.0], -5).unwrap_err();
    assert_eq!(err.cause().as_str(), "non_positive_horizon");
}

#[test]
fn test_predict_static_unallocatable_horizon() {
    let err = predict_static(&[1.0], i64::MAX).unwrap_err();
    assert_eq!(
        err,
        ForecastError::InvalidInput(InvalidInputCause::HorizonTooLarge { horizon: i64::MAX })
    );
    assert_eq!(err.cause().as_str(), "horizon_too_large");
}

#[test]
fn test_predict_pass_through() {
    let cases: [(&[f64], &[f64]); 5] = [
        (&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
        (&[5.0, 10.0, 15.0], &[5.0, 10.0, 15.0]),
        (&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]),
        (&[-1.0, -2.0, -3.0], &[-1.0, -2.0, -3.0]),
        (&[100.5], &[100.5]),
    ];
    for (input, expected) in cases {
        assert_eq!(predict(input).unwrap(), expected, "input {:?}", input);
    }
}

#[test]
fn test_predict_empty_input() {
    let err = predict(&[]).unwrap_err();
    assert_eq!(err.cause(), InvalidInputCause::EmptySeries);
    assert!(err.to_string().to_lowercase().contains("empty"));
}

#[test]
fn test_forecaster_is_shareable_across_threads() {
    let forecaster = Forecaster::new(ForecastPolicy::RepeatLast);
    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let forecaster = forecaster.clone();
            std::thread::spawn(move || {
                let series: Vec<f64> = (0..i).map(|v| v as f64).collect();
                forecaster.predict(&series, i).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let steps = i + 1;
        let out = handle.join().unwrap();
        assert_eq!(out, vec![(steps - 1) as f64; steps]);
    }
}

#[test]
fn test_forecaster_from_default_config() {
    let forecaster = Forecaster::from_config(&ForecastConfig::default());
    assert_eq!(forecaster.policy(), ForecastPolicy::RepeatLast);
    assert_eq!(forecaster.predict(&[1.0, 9.0], 2).unwrap(), vec![9.0, 9.0]);
}
