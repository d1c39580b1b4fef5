use caldate::{Interval, IntervalError, ParseIntervalError, Unit};


mod parsing {
    use super::*;

    #[test]
    fn the_whole_grammar() {
        assert_eq!(Interval::from_iso_string("P1Y2M3DT4H5M6S"),
                   Ok(Interval::new(1, 2, 3, 4, 5, 6.0)));
    }

    #[test]
    fn each_field_alone() {
        assert_eq!(Interval::from_iso_string("P3Y"), Ok(Interval::of(Unit::Years, 3)));
        assert_eq!(Interval::from_iso_string("P3M"), Ok(Interval::of(Unit::Months, 3)));
        assert_eq!(Interval::from_iso_string("P3D"), Ok(Interval::of(Unit::Days, 3)));
        assert_eq!(Interval::from_iso_string("PT3H"), Ok(Interval::of(Unit::Hours, 3)));
        assert_eq!(Interval::from_iso_string("PT3M"), Ok(Interval::of(Unit::Minutes, 3)));
        assert_eq!(Interval::from_iso_string("PT3S"), Ok(Interval::of(Unit::Seconds, 3)));
    }

    #[test]
    fn p_and_t_disambiguate_months_from_minutes() {
        let months = Interval::from_iso_string("P1M").unwrap();
        let minutes = Interval::from_iso_string("PT1M").unwrap();
        assert_eq!(months.months, 1);
        assert_eq!(months.minutes, 0);
        assert_eq!(minutes.minutes, 1);
        assert_eq!(minutes.months, 0);
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(Interval::from_iso_string("PT0.5S"),
                   Ok(Interval::new(0, 0, 0, 0, 0, 0.5)));
        assert_eq!(Interval::from_iso_string("PT10.25S"),
                   Ok(Interval::new(0, 0, 0, 0, 0, 10.25)));
    }

    #[test]
    fn negative_durations() {
        assert_eq!(Interval::from_iso_string("-P1YT6H"),
                   Ok(Interval::new(-1, 0, 0, -6, 0, 0.0)));
    }

    #[test]
    fn at_least_one_field_is_required() {
        assert!(matches!(Interval::from_iso_string("P"),
                         Err(ParseIntervalError::Empty(_))));
        assert!(matches!(Interval::from_iso_string("PT"),
                         Err(ParseIntervalError::Empty(_))));
        assert!(matches!(Interval::from_iso_string("P2DT"),
                         Err(ParseIntervalError::Empty(_))));
    }

    #[test]
    fn nonsense_is_rejected() {
        for bad in ["", "P1S", "PT1D", "T1H", "P1.5D", "P1Y2Y", "P-1D", "1DT"] {
            assert!(Interval::from_iso_string(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn from_str_matches_from_iso_string() {
        let via_trait: Interval = "P1Y2M".parse().unwrap();
        assert_eq!(via_trait, Interval::from_iso_string("P1Y2M").unwrap());
    }
}


mod rendering {
    use super::*;

    #[test]
    fn zero_is_pt0s() {
        assert_eq!(Interval::zero().to_iso_string().as_deref(), Some("PT0S"));
    }

    #[test]
    fn verbose_keeps_every_field() {
        assert_eq!(Interval::of(Unit::Days, 2).to_iso_string_verbose().as_deref(),
                   Some("P0Y0M2DT0H0M0S"));
        assert_eq!(Interval::zero().to_iso_string_verbose().as_deref(),
                   Some("P0Y0M0DT0H0M0S"));
    }

    #[test]
    fn mixed_signs_are_unrepresentable() {
        let mixed = Interval::new(1, 0, 0, -6, 0, 0.0);
        assert_eq!(mixed.to_iso_string(), None);
    }

    #[test]
    fn uniformly_negative_is_fine() {
        assert_eq!(Interval::new(0, -2, -10, 0, 0, 0.0).to_iso_string().as_deref(),
                   Some("-P2M10D"));
    }

    #[test]
    fn round_trips() {
        for text in ["P1Y", "P7D", "PT36H", "P1Y2M3DT4H5M6S", "-P10DT5M", "PT0.5S", "PT0S"] {
            let interval: Interval = text.parse().unwrap();
            assert_eq!(interval.to_iso_string().as_deref(), Some(text), "round-tripping {:?}", text);
        }
    }
}


mod totals {
    use super::*;

    #[test]
    fn time_only_intervals_have_totals() {
        assert_eq!(Interval::of(Unit::Hours, 2).total_seconds(), Ok(7200.0));
        assert_eq!(Interval::new(0, 0, 1, 1, 1, 1.5).total_seconds(),
                   Ok(86400.0 + 3600.0 + 60.0 + 1.5));
    }

    #[test]
    fn calendar_intervals_do_not() {
        assert_eq!(Interval::of(Unit::Years, 1).total_seconds(),
                   Err(IntervalError::CalendarUnits));
        assert_eq!(Interval::of(Unit::Months, -1).total_seconds(),
                   Err(IntervalError::CalendarUnits));
    }
}


mod value_semantics {
    use super::*;

    #[test]
    fn negation_twice_is_identity() {
        let interval = Interval::new(1, 2, 3, 4, 5, 6.5);
        assert_eq!((-(-interval)), interval);
    }

    #[test]
    fn times_matches_repeated_addition() {
        let mut tripled = Interval::of(Unit::Days, 2);
        tripled += Interval::of(Unit::Days, 2);
        tripled += Interval::of(Unit::Days, 2);
        assert_eq!(tripled, Interval::of(Unit::Days, 2) * 3);
    }

    #[test]
    fn equality_is_field_wise() {
        assert_eq!(Interval::of(Unit::Days, 1), Interval::new(0, 0, 1, 0, 0, 0.0));
        assert_ne!(Interval::of(Unit::Days, 1), Interval::of(Unit::Hours, 24));
    }
}
