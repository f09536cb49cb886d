//! Fixed inputs with known answers, shared by the unit tests and `two-sums check`.

use std::str::FromStr;

use log::debug;

use crate::result::TwoSumError;
use crate::two_sum;

#[derive(Debug, Clone, Copy)]
pub struct Scenario<'a> {
    pub nums: &'a [i32],
    pub target: i32,
    pub expected: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub expected: Option<(usize, usize)>,
    pub actual: Option<(usize, usize)>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl Scenario<'_> {
    pub fn run(&self) -> CheckOutcome {
        CheckOutcome {
            expected: self.expected,
            actual: two_sum(self.nums, self.target),
        }
    }
}

pub const REFERENCE: &[Scenario<'static>] = &[
    Scenario { nums: &[2, 7, 11, 15], target: 9, expected: Some((0, 1)) },
    Scenario { nums: &[3, 2, 4], target: 6, expected: Some((1, 2)) },
    Scenario { nums: &[3, 3], target: 6, expected: Some((0, 1)) },
    Scenario { nums: &[1, 2, 3], target: 100, expected: None },
    Scenario { nums: &[-3, 4, 3, 90], target: 0, expected: Some((0, 2)) },
];

/// Runs every scenario in order and stops at the first mismatch.
pub fn check_all(scenarios: &[Scenario]) -> Result<usize, TwoSumError> {
    for (index, scenario) in scenarios.iter().enumerate() {
        let outcome = scenario.run();
        debug!(
            "scenario {}: {:?} target {} -> {:?}",
            index, scenario.nums, scenario.target, outcome.actual
        );
        if !outcome.passed() {
            return Err(TwoSumError::CheckFailed {
                index,
                expected: outcome.expected,
                actual: outcome.actual,
            });
        }
    }
    Ok(scenarios.len())
}

/// An owned scenario, written as `NUMS:TARGET=EXPECTED`.
///
/// `NUMS` is a comma separated list (possibly empty), `EXPECTED` is either
/// `i,j` or `none`: `2,7,11,15:9=0,1`, `1,2,3:100=none`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub nums: Vec<i32>,
    pub target: i32,
    pub expected: Option<(usize, usize)>,
}

impl Case {
    pub fn as_scenario(&self) -> Scenario<'_> {
        Scenario {
            nums: &self.nums,
            target: self.target,
            expected: self.expected,
        }
    }
}

impl FromStr for Case {
    type Err = TwoSumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TwoSumError::InvalidCase(s.to_string());

        let (nums, rest) = s.split_once(':').ok_or_else(invalid)?;
        let (target, expected) = rest.split_once('=').ok_or_else(invalid)?;

        let nums = if nums.trim().is_empty() {
            vec![]
        } else {
            nums.split(',')
                .map(|n| n.trim().parse::<i32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?
        };
        let target = target.trim().parse::<i32>().map_err(|_| invalid())?;

        let expected = match expected.trim() {
            "none" => None,
            pair => {
                let (left, right) = pair.split_once(',').ok_or_else(invalid)?;
                let left = left.trim().parse::<usize>().map_err(|_| invalid())?;
                let right = right.trim().parse::<usize>().map_err(|_| invalid())?;
                Some((left, right))
            }
        };

        Ok(Case { nums, target, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_all, Case, Scenario, REFERENCE};
    use crate::result::TwoSumError;

    #[test]
    fn reference_set_passes() {
        assert_eq!(check_all(REFERENCE).unwrap(), REFERENCE.len());
    }

    #[test]
    fn mismatch_is_reported_with_its_index() {
        let scenarios = [
            REFERENCE[0],
            Scenario { nums: &[1, 2], target: 3, expected: None },
        ];
        match check_all(&scenarios) {
            Err(TwoSumError::CheckFailed { index, expected, actual }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, None);
                assert_eq!(actual, Some((0, 1)));
            }
            other => panic!("expected a check failure, got {:?}", other),
        }
    }

    #[test]
    fn empty_set_trivially_passes() {
        assert_eq!(check_all(&[]).unwrap(), 0);
    }

    #[test]
    fn parse_cases() {
        let case: Case = "2,7,11,15:9=0,1".parse().unwrap();
        assert_eq!(case.nums, vec![2, 7, 11, 15]);
        assert_eq!(case.target, 9);
        assert_eq!(case.expected, Some((0, 1)));

        let case: Case = "-3, 4, 3:0=none".parse().unwrap();
        assert_eq!(case.nums, vec![-3, 4, 3]);
        assert_eq!(case.expected, None);

        let case: Case = ":5=none".parse().unwrap();
        assert!(case.nums.is_empty());
        assert_eq!(check_all(&[case.as_scenario()]).unwrap(), 1);
    }

    #[test]
    fn malformed_cases_are_rejected() {
        for bad in ["", "1,2", "1,2:3", "1,x:3=none", "1,2:3=0", "1,2:three=none", "1,2:3=0,-1"] {
            assert!(
                matches!(bad.parse::<Case>(), Err(TwoSumError::InvalidCase(_))),
                "{:?} should not parse",
                bad
            );
        }
    }
}
