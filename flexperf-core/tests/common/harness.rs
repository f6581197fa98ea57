//! Assertion macros

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let diff = (actual - expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_speeds_ordered {
    ($result:expr) => {
        if let Some(speeds) = $result.speeds {
            if !(speeds.v1 <= speeds.vr && speeds.vr <= speeds.v2) {
                panic!("Speeds out of order: {} ({})", speeds, $result.summary());
            }
        }
    };
}
