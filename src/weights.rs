use itertools::Itertools;
use std::fmt;

use crate::error::{GeneratorError, Result};
use crate::nucleotide::Nucleotide;

/// Relative selection weights for A, C, G and T.
///
/// The weights do not need to sum to 1: a symbol's probability is its weight
/// divided by the total. A `Weights` value always has at least one positive
/// weight and a finite total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    values: [f64; 4],
    total: f64,
}

impl Weights {
    pub fn new(values: [f64; 4]) -> Result<Self> {
        for (symbol, value) in Nucleotide::ALL.into_iter().zip(values) {
            if !value.is_finite() || value < 0.0 {
                return Err(GeneratorError::InvalidWeight { symbol, value });
            }
        }
        let total = values.iter().sum::<f64>();
        if total == 0.0 {
            return Err(GeneratorError::DegenerateWeights);
        }
        if !total.is_finite() {
            return Err(GeneratorError::WeightOverflow);
        }
        Ok(Weights { values, total })
    }

    /// Parses the four command line weights in A, C, G, T order.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        if raw.len() != 4 {
            return Err(GeneratorError::ArgumentCount {
                found: raw.len() + 1,
            });
        }
        let mut values = [0.0; 4];
        for (slot, (symbol, text)) in values.iter_mut().zip(Nucleotide::ALL.into_iter().zip(raw)) {
            let text: &str = text.as_ref();
            *slot = text
                .trim()
                .parse::<f64>()
                .map_err(|_| GeneratorError::WeightParse {
                    symbol,
                    value: text.to_string(),
                })?;
        }
        Weights::new(values)
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn weight(&self, symbol: Nucleotide) -> f64 {
        self.values[symbol.index()]
    }

    pub fn probability(&self, symbol: Nucleotide) -> f64 {
        self.weight(symbol) / self.total
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.values
    }

    /// The last symbol in A, C, G, T order that can actually be drawn.
    pub(crate) fn last_positive(&self) -> Nucleotide {
        Nucleotide::ALL
            .into_iter()
            .rev()
            .find(|symbol| self.weight(*symbol) > 0.0)
            .unwrap_or(Nucleotide::T)
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Nucleotide::ALL
            .iter()
            .map(|symbol| format!("{}={}", symbol, self.weight(*symbol)))
            .join(", ");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn probabilities_are_normalized() {
        let weights = Weights::new([2.0, 1.0, 1.0, 0.0]).unwrap();
        assert_relative_eq!(weights.total(), 4.0);
        assert_relative_eq!(weights.probability(Nucleotide::A), 0.5);
        assert_relative_eq!(weights.probability(Nucleotide::C), 0.25);
        assert_relative_eq!(weights.probability(Nucleotide::T), 0.0);
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        assert!(matches!(
            Weights::new([0.0; 4]),
            Err(GeneratorError::DegenerateWeights)
        ));
    }

    #[test]
    fn negative_and_non_finite_weights_name_the_symbol() {
        match Weights::new([1.0, -0.5, 1.0, 1.0]) {
            Err(GeneratorError::InvalidWeight { symbol, .. }) => assert_eq!(symbol, Nucleotide::C),
            other => panic!("unexpected result {:?}", other),
        }
        match Weights::new([1.0, 1.0, 1.0, f64::NAN]) {
            Err(GeneratorError::InvalidWeight { symbol, .. }) => assert_eq!(symbol, Nucleotide::T),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            Weights::new([f64::MAX, f64::MAX, 0.0, 0.0]),
            Err(GeneratorError::WeightOverflow)
        ));
    }

    #[test]
    fn parse_reports_the_failing_weight() {
        match Weights::parse(&["0.1", "0.2", "lots", "0.3"]) {
            Err(GeneratorError::WeightParse { symbol, value }) => {
                assert_eq!(symbol, Nucleotide::G);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn parse_accepts_integers_and_decimals() {
        let weights = Weights::parse(&["1", "0.5", "0", "2.5e0"]).unwrap();
        assert_eq!(weights.as_array(), [1.0, 0.5, 0.0, 2.5]);
        assert_eq!(weights.last_positive(), Nucleotide::T);
        assert_eq!(
            Weights::new([3.0, 1.0, 0.0, 0.0]).unwrap().last_positive(),
            Nucleotide::C
        );
    }
}
