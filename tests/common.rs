// False positive
#[allow(unused)]
pub use self::stats::*;

/// Beatmap stats used throughout the tests
mod stats {
    #![allow(unused)]

    pub const HP: f64 = 5.0;
    pub const CS: f64 = 4.0;
    pub const OD: f64 = 8.0;
    pub const AR: f64 = 9.0;
}

#[allow(unused)]
pub fn difficulty() -> rosu_mod_stats::Difficulty {
    rosu_mod_stats::Difficulty::new(HP, CS, OD, AR)
}

#[allow(unused)]
#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert_approx(a, b, f64::EPSILON);
}

#[allow(unused)]
#[track_caller]
pub fn assert_approx(a: f64, b: f64, tolerance: f64) {
    assert!((a - b).abs() < tolerance, "{a} != {b}");
}
