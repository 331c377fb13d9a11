use crate::model::{Cvc, Expiry};
use chrono::{Datelike, Utc};
use rand::Rng;

/// Years ahead of the current one an expiry may fall in, exclusive.
pub const EXPIRY_YEAR_SPAN: i32 = 5;

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Month in 1..=12, year in `current_year..current_year + 5`.
///
/// The month is not compared against today, so a date earlier in the
/// current year can come out.
pub fn random_expiry<R: Rng + ?Sized>(rng: &mut R, current_year: i32) -> Expiry {
    Expiry {
        month: rng.random_range(1..=12),
        year: current_year + rng.random_range(0..EXPIRY_YEAR_SPAN),
    }
}

pub fn random_cvc<R: Rng + ?Sized>(rng: &mut R) -> Cvc {
    Cvc::new_unchecked(rng.random_range(100..=999u16).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn expiry_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2024);
        let year = current_year();

        for _ in 0..10_000 {
            let expiry = random_expiry(&mut rng, year);
            assert!((1..=12).contains(&expiry.month), "{expiry:?}");
            assert!((year..year + EXPIRY_YEAR_SPAN).contains(&expiry.year), "{expiry:?}");
            assert_eq!(expiry.month_str().len(), 2);
            assert_eq!(expiry.year_str().len(), 4);
        }
    }

    #[test]
    fn expiry_covers_every_month_and_year_offset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut months = [false; 12];
        let mut offsets = [false; EXPIRY_YEAR_SPAN as usize];

        for _ in 0..2_000 {
            let expiry = random_expiry(&mut rng, 2030);
            months[(expiry.month - 1) as usize] = true;
            offsets[(expiry.year - 2030) as usize] = true;
        }

        assert!(months.iter().all(|seen| *seen));
        assert!(offsets.iter().all(|seen| *seen));
    }

    #[test]
    fn cvc_is_three_digits() {
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..5_000 {
            let cvc = random_cvc(&mut rng);
            let value: u16 = cvc.as_str().parse().unwrap();
            assert_eq!(cvc.as_str().len(), 3);
            assert!((100..=999).contains(&value));
        }
    }
}
