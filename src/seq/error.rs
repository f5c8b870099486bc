use thiserror::Error;

/// Errors produced by the fallible interval constructors and insertions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval lower bound {lo} is greater than upper bound {hi}")]
    Inverted { lo: String, hi: String },

    #[error("Interval bounds {lo} and {hi} cannot be ordered")]
    Incomparable { lo: String, hi: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_display() {
        let e = IntervalError::Inverted {
            lo: "7".to_string(),
            hi: "3".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Interval lower bound 7 is greater than upper bound 3"
        );
    }

    #[test]
    fn incomparable_display() {
        let e = IntervalError::Incomparable {
            lo: "NaN".to_string(),
            hi: "1".to_string(),
        };
        assert!(e.to_string().contains("cannot be ordered"));
    }
}
