use regex::Regex;

use crate::error::TrialError;

/// Pulls the completion-time token out of a simulator's stdout.
pub trait TimingExtractor {
    fn extract<'a>(&self, output: &'a str) -> Result<&'a str, TrialError>;
}

/// Matches `at time <number>`, as printed by the simulators on exit
/// (` Simulator terminated at time 1043.22`). The number is digits with
/// at most one decimal point; the first occurrence wins.
#[derive(Debug, Clone)]
pub struct AtTimePattern {
    re: Regex,
}

impl AtTimePattern {
    pub fn new() -> Self {
        // Literal pattern, compile can't fail.
        let re = Regex::new(r"at time (\d+(?:\.\d*)?|\.\d+)").unwrap();
        Self { re }
    }
}

impl Default for AtTimePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingExtractor for AtTimePattern {
    fn extract<'a>(&self, output: &'a str) -> Result<&'a str, TrialError> {
        self.re
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(TrialError::TimingNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{AtTimePattern, TimingExtractor};
    use crate::TrialError;

    #[test]
    fn finds_token_among_other_lines() {
        let output = "-----  Selective Repeat Network Simulator Version 1.1 --------\n\
                      packet loss probability: 0.000000\n\
                      done at time 12.5ms\n\
                      after sending 10 msgs from layer5\n";
        assert_eq!(AtTimePattern::new().extract(output).unwrap(), "12.5");
    }

    #[test]
    fn first_match_wins() {
        let output = "A at time 7.25\nB at time 99.0\n";
        assert_eq!(AtTimePattern::new().extract(output).unwrap(), "7.25");
    }

    #[test]
    fn integer_token() {
        let output = " Simulator terminated at time 1043\n";
        assert_eq!(AtTimePattern::new().extract(output).unwrap(), "1043");
    }

    #[test]
    fn only_one_decimal_point() {
        let output = "at time 1.2.3";
        assert_eq!(AtTimePattern::new().extract(output).unwrap(), "1.2");
    }

    #[test]
    fn event_trace_lines_do_not_match() {
        let output = "EVENT time: 12.000000,  type: 1\nINSERTEVENT: time is 3.0\n";
        assert!(matches!(
            AtTimePattern::new().extract(output),
            Err(TrialError::TimingNotFound)
        ));
    }

    #[test]
    fn phrase_without_number_is_not_found() {
        assert!(matches!(
            AtTimePattern::new().extract("terminated at time ???"),
            Err(TrialError::TimingNotFound)
        ));
        assert!(matches!(
            AtTimePattern::new().extract(""),
            Err(TrialError::TimingNotFound)
        ));
    }
}
