use crate::{
    errors::CardError,
    model::{Bin, CardNumber},
    utils::luhn_valid,
};
use rand::{Rng, rng};

pub const DEFAULT_CARD_LENGTH: usize = 16;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Appends uniformly random digits to `bin` until the whole number passes
/// the Luhn check, giving up after `max_attempts` candidates.
pub fn generate_card_number<R: Rng + ?Sized>(
    bin: &Bin,
    target_length: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<CardNumber, CardError> {
    let prefix = bin.as_str();

    if prefix.len() >= target_length {
        return Err(CardError::InvalidBin(format!(
            "{prefix} must be shorter than {target_length} digits"
        )));
    }

    let filler = target_length - prefix.len();
    let mut candidate = String::with_capacity(target_length);

    for _ in 0..max_attempts {
        candidate.clear();
        candidate.push_str(prefix);
        candidate.extend((0..filler).map(|_| char::from(b'0' + rng.random_range(0..10u8))));

        if luhn_valid(&candidate) {
            return Ok(CardNumber::new_unchecked(candidate));
        }
    }

    Err(CardError::GenerationExhausted {
        attempts: max_attempts,
    })
}

pub fn random_card_number(bin: &Bin) -> Result<CardNumber, CardError> {
    generate_card_number(bin, DEFAULT_CARD_LENGTH, DEFAULT_MAX_ATTEMPTS, &mut rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generated_numbers_keep_bin_length_and_checksum() {
        let mut rng = StdRng::seed_from_u64(7);

        for raw in ["411111", "520000", "601100", "370000", "000000", "999999"] {
            let bin = Bin::parse(raw).unwrap();
            for _ in 0..200 {
                let number = generate_card_number(&bin, 16, DEFAULT_MAX_ATTEMPTS, &mut rng)
                    .unwrap();
                assert!(number.as_str().starts_with(raw));
                assert_eq!(number.len(), 16);
                assert!(luhn_valid(number.as_str()), "{number}");
            }
        }
    }

    #[test]
    fn respects_other_target_lengths() {
        let mut rng = StdRng::seed_from_u64(42);
        let bin = Bin::parse("37828224").unwrap();

        let number = generate_card_number(&bin, 15, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();

        assert_eq!(number.len(), 15);
        assert!(number.as_str().starts_with("37828224"));
        assert!(luhn_valid(number.as_str()));
    }

    #[test]
    fn bin_not_shorter_than_target_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let bin = Bin::parse("41111111").unwrap();

        let err = generate_card_number(&bin, 8, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap_err();

        assert!(matches!(err, CardError::InvalidBin(_)));
    }

    #[test]
    fn zero_attempts_fails_closed() {
        let mut rng = StdRng::seed_from_u64(1);
        let bin = Bin::parse("411111").unwrap();

        let err = generate_card_number(&bin, 16, 0, &mut rng).unwrap_err();

        assert_eq!(err, CardError::GenerationExhausted { attempts: 0 });
    }

    #[test]
    fn thread_rng_wrapper_uses_defaults() {
        let bin = Bin::parse("411111").unwrap();

        let number = random_card_number(&bin).unwrap();

        assert_eq!(number.len(), DEFAULT_CARD_LENGTH);
        assert!(luhn_valid(number.as_str()));
    }
}
