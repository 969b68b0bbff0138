//! Property tests for the day count conventions.

use bondlab_core::prelude::*;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Date> {
    (1990i32..2040, 1u32..=12, 1u32..=31)
        .prop_filter_map("no such calendar day", |(y, m, d)| Date::from_ymd(y, m, d).ok())
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Annual),
        Just(Frequency::SemiAnnual),
        Just(Frequency::EveryFourMonths),
        Just(Frequency::Quarterly),
        Just(Frequency::BiMonthly),
        Just(Frequency::Monthly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn fraction_non_decreasing_in_end_date(
        start in date_strategy(),
        offset in 0i64..4000,
        step in 1i64..60,
        frequency in frequency_strategy(),
    ) {
        let end = start.add_days(offset);
        let later = end.add_days(step);

        for convention in DayCountConvention::all() {
            let a = convention.accrued_fraction(start, end, frequency).unwrap();
            let b = convention.accrued_fraction(start, later, frequency).unwrap();

            prop_assert!(
                b.fraction >= a.fraction,
                "{} not monotone: {} -> {} gave {} then {}",
                convention, end, later, a.fraction, b.fraction
            );
        }
    }

    #[test]
    fn actual_conventions_strictly_increasing(
        start in date_strategy(),
        offset in 0i64..4000,
        frequency in frequency_strategy(),
    ) {
        let end = start.add_days(offset);
        let next = end.add_days(1);

        for convention in [
            DayCountConvention::Actual360,
            DayCountConvention::Actual365,
            DayCountConvention::ActualActual,
        ] {
            let a = convention.accrued_fraction(start, end, frequency).unwrap();
            let b = convention.accrued_fraction(start, next, frequency).unwrap();
            prop_assert!(b.fraction > a.fraction);
            prop_assert_eq!(b.total_days, a.total_days + 1);
        }
    }

    #[test]
    fn actual_actual_one_period_is_one(
        start in date_strategy(),
        frequency in frequency_strategy(),
    ) {
        let end = start.add_months(frequency.months_per_period() as i32).unwrap();
        let accrual = DayCountConvention::ActualActual
            .accrued_fraction(start, end, frequency)
            .unwrap();
        prop_assert!((accrual.fraction - 1.0).abs() < 1e-12);
    }
}

#[test]
fn month_end_start_stays_monotone() {
    let start = Date::from_ymd(2001, 1, 31).unwrap();
    let mut previous = f64::NEG_INFINITY;

    for offset in 0..120 {
        let accrual = DayCountConvention::Thirty360
            .accrued_fraction(start, start.add_days(offset), Frequency::BiMonthly)
            .unwrap();
        assert!(accrual.fraction >= previous);
        previous = accrual.fraction;
    }
}

#[test]
fn zero_length_span_is_zero_everywhere() {
    let date = Date::from_ymd(2004, 2, 29).unwrap();
    for convention in DayCountConvention::all() {
        let accrual = convention
            .accrued_fraction(date, date, Frequency::SemiAnnual)
            .unwrap();
        assert_eq!(accrual.total_days, 0);
        assert_eq!(accrual.fraction, 0.0);
    }
}
