//! Batch validation.
//!
//! Each candidate goes through the same gates as [`check`], independently of
//! its neighbours, so results always line up with the input slice. The
//! `parallel` feature spreads the work over rayon's pool.

use crate::error::{Gate, ValidationError};
use crate::validate::check;
use crate::ValidatedCard;

/// Outcome of one candidate in a batch.
pub type BatchResult = Result<ValidatedCard, ValidationError>;

/// Batch entry points grouped behind one handle.
///
/// # Example
///
/// ```
/// use card_gate::BatchValidator;
///
/// let numbers = ["4111111111111111", "6011111111111117", "378282246310005"];
/// let summary = BatchValidator::new().summarize(&numbers);
///
/// assert_eq!(summary.accepted, 2);
/// assert_eq!(summary.rejected_issuer, 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchValidator {
    _private: (),
}

impl BatchValidator {
    /// Returns a validator handle.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every candidate and returns one result per input, in order.
    pub fn validate_all<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<BatchResult> {
        validate_batch(numbers)
    }

    /// Keeps only the accepted cards, dropping every rejection.
    pub fn validate_valid_only<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<ValidatedCard> {
        numbers.iter().flat_map(|n| check(Some(n.as_ref()))).collect()
    }

    /// Splits a batch into accepted cards and `(index, reason)` rejections.
    pub fn validate_partitioned<S: AsRef<str>>(
        &self,
        numbers: &[S],
    ) -> (Vec<ValidatedCard>, Vec<(usize, ValidationError)>) {
        numbers.iter().enumerate().fold(
            (Vec::new(), Vec::new()),
            |(mut accepted, mut rejected), (index, number)| {
                match check(Some(number.as_ref())) {
                    Ok(card) => accepted.push(card),
                    Err(reason) => rejected.push((index, reason)),
                }
                (accepted, rejected)
            },
        )
    }

    /// Counts acceptances and rejections per gate without keeping any card.
    pub fn summarize<S: AsRef<str>>(&self, numbers: &[S]) -> BatchSummary {
        numbers
            .iter()
            .map(|n| check(Some(n.as_ref())))
            .fold(BatchSummary::default(), BatchSummary::record)
    }

    /// Parallel form of [`validate_all`](Self::validate_all).
    ///
    /// Only available with the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(&self, numbers: &[S]) -> Vec<BatchResult> {
        validate_batch_parallel(numbers)
    }
}

/// Per-gate tally of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidates that passed every gate.
    pub accepted: usize,
    /// Candidates stopped by the well-formedness gate.
    pub rejected_well_formed: usize,
    /// Candidates stopped by the issuer and length gate.
    pub rejected_issuer: usize,
    /// Candidates stopped by the Luhn gate.
    pub rejected_checksum: usize,
}

impl BatchSummary {
    fn record(mut self, outcome: BatchResult) -> Self {
        match outcome.map_err(|e| e.gate()) {
            Ok(_) => self.accepted += 1,
            Err(Gate::WellFormed) => self.rejected_well_formed += 1,
            Err(Gate::Issuer) => self.rejected_issuer += 1,
            Err(Gate::Checksum) => self.rejected_checksum += 1,
        }
        self
    }

    /// Number of candidates tallied.
    pub fn total(&self) -> usize {
        self.accepted + self.rejected()
    }

    /// Number of candidates rejected at any gate.
    pub fn rejected(&self) -> usize {
        self.rejected_well_formed + self.rejected_issuer + self.rejected_checksum
    }
}

/// Free-function form of [`BatchValidator::validate_all`].
#[inline]
pub fn validate_batch<S: AsRef<str>>(numbers: &[S]) -> Vec<BatchResult> {
    numbers.iter().map(|n| check(Some(n.as_ref()))).collect()
}

/// Applies the boolean contract to optional candidates. `None` entries come
/// back `false`, the same as a missing single input.
///
/// # Example
///
/// ```
/// use card_gate::batch::validate_optional;
///
/// let numbers = [Some("4111111111111111"), None, Some("")];
/// assert_eq!(validate_optional(&numbers), vec![true, false, false]);
/// ```
pub fn validate_optional(numbers: &[Option<&str>]) -> Vec<bool> {
    numbers.iter().copied().map(crate::validate).collect()
}

/// Returns `(accepted, rejected)` counts.
///
/// # Example
///
/// ```
/// use card_gate::batch::count_valid;
///
/// let numbers = ["4111111111111111", "6011111111111117", "5500000000000004"];
/// assert_eq!(count_valid(&numbers), (2, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(numbers: &[S]) -> (usize, usize) {
    let accepted = numbers
        .iter()
        .filter(|n| crate::validate(Some(n.as_ref())))
        .count();
    (accepted, numbers.len() - accepted)
}

/// Parallel form of [`validate_batch`]. Output order matches the input.
///
/// Only available with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<BatchResult> {
    use rayon::prelude::*;

    numbers.par_iter().map(|n| check(Some(n.as_ref()))).collect()
}

/// Parallel form of [`count_valid`].
///
/// Only available with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let accepted = numbers
        .par_iter()
        .filter(|n| crate::validate(Some(n.as_ref())))
        .count();
    (accepted, numbers.len() - accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISA: &str = "4012888888881881";
    const MASTERCARD: &str = "5105105105105100";
    const AMEX: &str = "371449635398431";
    const DISCOVER: &str = "6011000990139424";
    const BAD_CHECKSUM: &str = "4111111111111121";

    #[test]
    fn test_results_follow_input_order() {
        let numbers = [VISA, DISCOVER, MASTERCARD, AMEX];
        let results = BatchValidator::new().validate_all(&numbers);

        let brands: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().ok().map(|c| c.brand()))
            .collect();
        assert_eq!(
            brands,
            vec![
                Some(crate::CardBrand::Visa),
                None,
                Some(crate::CardBrand::Mastercard),
                Some(crate::CardBrand::Amex),
            ]
        );
        assert_eq!(results[1].as_ref().unwrap_err(), &ValidationError::UnknownIssuer);
    }

    #[test]
    fn test_valid_only_drops_rejections() {
        let kept = BatchValidator::new().validate_valid_only(&[DISCOVER, AMEX, BAD_CHECKSUM]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].last_four(), "8431");
    }

    #[test]
    fn test_partition_keeps_indices() {
        let numbers = [VISA, DISCOVER, MASTERCARD, "4111 1111"];
        let (accepted, rejected) = BatchValidator::new().validate_partitioned(&numbers);

        assert_eq!(accepted.len(), 2);
        assert_eq!(rejected[0], (1, ValidationError::UnknownIssuer));
        assert_eq!(rejected[1].0, 3);
        assert_eq!(rejected[1].1.gate(), Gate::WellFormed);
    }

    #[test]
    fn test_summary_counts_each_gate() {
        let numbers = [VISA, AMEX, DISCOVER, BAD_CHECKSUM, "", "4111-1111-1111-1111"];
        let summary = BatchValidator::new().summarize(&numbers);

        assert_eq!(
            summary,
            BatchSummary {
                accepted: 2,
                rejected_well_formed: 2,
                rejected_issuer: 1,
                rejected_checksum: 1,
            }
        );
        assert_eq!(summary.total(), numbers.len());
        assert_eq!(summary.rejected(), 4);
    }

    #[test]
    fn test_owned_strings_accepted() {
        let numbers: Vec<String> = vec![AMEX.to_string(), String::new()];
        assert_eq!(count_valid(&numbers), (1, 1));
    }

    #[test]
    fn test_optional_candidates() {
        let numbers = [Some(VISA), None, Some(""), Some(AMEX)];
        assert_eq!(validate_optional(&numbers), vec![true, false, false, true]);
    }

    #[test]
    fn test_empty_input() {
        let numbers: [&str; 0] = [];
        assert!(validate_batch(&numbers).is_empty());
        assert_eq!(count_valid(&numbers), (0, 0));
        assert_eq!(BatchValidator::new().summarize(&numbers).total(), 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_agrees_with_sequential() {
        let numbers: Vec<String> = (0..1000u32)
            .map(|i| match i % 5 {
                0 => VISA.to_string(),
                1 => AMEX.to_string(),
                2 => DISCOVER.to_string(),
                3 => BAD_CHECKSUM.to_string(),
                _ => i.to_string(),
            })
            .collect();

        let sequential = validate_batch(&numbers);
        let parallel = BatchValidator::new().validate_parallel(&numbers);
        let reasons = |rs: &[BatchResult]| -> Vec<Option<ValidationError>> {
            rs.iter().map(|r| r.as_ref().err().cloned()).collect()
        };
        assert_eq!(reasons(&sequential), reasons(&parallel));
        assert_eq!(count_valid_parallel(&numbers), count_valid(&numbers));
    }
}
