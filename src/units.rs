use crate::{Num, AU, SECONDS_PER_DAY};

pub fn convert_au_to_meters(au: Num) -> Num {
    au * AU
}

pub fn convert_meters_to_au(meters: Num) -> Num {
    meters / AU
}

pub fn convert_seconds_to_days(seconds: Num) -> Num {
    seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0 ; "origin")]
    #[test_case(1.0 ; "earth distance")]
    #[test_case(0.387 ; "mercury distance")]
    #[test_case(30.07 ; "neptune distance")]
    #[test_case(-2.5 ; "negative")]
    fn au_round_trip(au: Num) {
        let back = convert_meters_to_au(convert_au_to_meters(au));

        assert!(
            (back - au).abs() <= Num::EPSILON * au.abs().max(1.0),
            "{au} AU came back as {back} AU"
        );
    }

    #[test]
    fn conversion_is_linear() {
        let a = convert_au_to_meters(1.5);
        let b = convert_au_to_meters(2.5);
        let sum = convert_au_to_meters(4.0);

        assert!((a + b - sum).abs() / sum < 1e-6);
        assert_eq!(convert_au_to_meters(1.0), AU);
    }

    #[test]
    fn one_day_of_seconds() {
        assert_eq!(convert_seconds_to_days(86_400.0), 1.0);
    }
}
