use caldate::{CalendarDate, DatePiece, Interval, Month, Unit};


fn ymd(year: i64, month: i64, day: i64) -> CalendarDate {
    CalendarDate::from_fields(year, month, day)
}


mod months {
    use super::*;

    #[test]
    fn january_31st_clamps_into_february() {
        assert_eq!(ymd(2024, 1, 31).add(&Interval::of(Unit::Months, 1)), ymd(2024, 2, 29));
        assert_eq!(ymd(2023, 1, 31).add(&Interval::of(Unit::Months, 1)), ymd(2023, 2, 28));
    }

    #[test]
    fn clamping_does_not_stick() {
        // Clamped to the 30th once, but two months from the 31st is a 31st.
        assert_eq!(ymd(2024, 3, 31).add(&Interval::of(Unit::Months, 2)), ymd(2024, 5, 31));
    }

    #[test]
    fn backwards() {
        assert_eq!(ymd(2024, 3, 31).add(&Interval::of(Unit::Months, -1)), ymd(2024, 2, 29));
        assert_eq!(ymd(2024, 1, 15).add(&Interval::of(Unit::Months, -13)), ymd(2022, 12, 15));
    }

    #[test]
    fn years_are_twelve_months() {
        let date = ymd(2020, 2, 29);
        assert_eq!(date.add(&Interval::of(Unit::Years, 3)), ymd(2023, 2, 28));
        assert_eq!(date.add(&Interval::of(Unit::Years, 4)), ymd(2024, 2, 29));
        assert_eq!(date.add(&Interval::of(Unit::Months, 48)),
                   date.add(&Interval::of(Unit::Years, 4)));
    }
}


mod days {
    use super::*;

    #[test]
    fn across_month_ends() {
        assert_eq!(ymd(2024, 2, 28).add(&Interval::of(Unit::Days, 2)), ymd(2024, 3, 1));
        assert_eq!(ymd(2023, 3, 1).add(&Interval::of(Unit::Days, -1)), ymd(2023, 2, 28));
    }

    #[test]
    fn across_year_ends() {
        assert_eq!(ymd(2023, 12, 31).add(&Interval::of(Unit::Days, 1)), ymd(2024, 1, 1));
        assert_eq!(ymd(2024, 1, 1).add(&Interval::of(Unit::Days, -365)), ymd(2023, 1, 1));
    }

    #[test]
    fn a_year_of_days() {
        let start = ymd(2024, 3, 1);
        assert_eq!(start.add(&Interval::of(Unit::Days, 365)), ymd(2025, 3, 1));
    }

    #[test]
    fn zero_interval_is_identity() {
        let date = ymd(2024, 6, 5);
        assert_eq!(date.add(&Interval::zero()), date);
    }
}


mod rollover {
    use super::*;

    #[test]
    fn month_thirteen() {
        assert_eq!(ymd(2015, 13, 1), ymd(2016, 1, 1));
    }

    #[test]
    fn day_zero_and_negative() {
        assert_eq!(ymd(2015, 3, 0), ymd(2015, 2, 28));
        assert_eq!(ymd(2015, 1, -30), ymd(2014, 12, 1));
    }

    #[test]
    fn day_far_past_the_end() {
        assert_eq!(ymd(2015, 1, 60), ymd(2015, 3, 1));
        assert_eq!(ymd(2016, 1, 60), ymd(2016, 2, 29));
    }

    #[test]
    fn never_an_invalid_date() {
        for day in -400..800 {
            let date = ymd(2020, 6, day);
            let last = caldate::days_in_month(date.year(), date.month());
            assert!(date.day() >= 1 && date.day() <= last);
        }
    }
}


mod comparisons {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn compare_is_antisymmetric() {
        let dates = [ymd(2019, 12, 31), ymd(2020, 1, 1), ymd(2020, 1, 2), ymd(2020, 2, 1)];
        for a in &dates {
            for b in &dates {
                assert_eq!(a.cmp(b).reverse(), b.cmp(a));
                assert_eq!(a == b, a.cmp(b) == Ordering::Equal);
            }
        }
    }

    #[test]
    fn equality_ignores_how_a_date_was_made() {
        assert_eq!(ymd(2016, 1, 1), ymd(2015, 13, 1));
        assert_eq!(ymd(2016, 3, 1), CalendarDate::new(2016, Month::March, 1));
    }
}
