//! Startup self-check of the clock and the random source.

use inquisitor_core::{Clock, RandomCostGenerator};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YearCheck {
    /// No expected year configured.
    Unchecked { actual: i32 },
    Matches { year: i32 },
    Mismatch { expected: i32, actual: i32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelfCheckReport {
    pub year: YearCheck,
    pub seed_initialized: bool,
}

impl SelfCheckReport {
    pub fn passed(&self) -> bool {
        !matches!(self.year, YearCheck::Mismatch { .. }) && self.seed_initialized
    }

    /// Human-readable lines, one per check.
    pub fn lines(&self) -> Vec<String> {
        let year = match self.year {
            YearCheck::Unchecked { actual } => {
                format!("Self-check: current year is {actual}.")
            }
            YearCheck::Matches { .. } => "Self-check: year generation is correct.".to_string(),
            YearCheck::Mismatch { expected, actual } => format!(
                "Self-check: year generation is incorrect. Expected: {expected}, Actual: {actual}"
            ),
        };
        let seed = if self.seed_initialized {
            "Self-check: random seed is initialized."
        } else {
            "Self-check: random seed is not initialized."
        };
        vec![year, seed.to_string()]
    }
}

/// Run both checks. Touching the generator here forces its one-time seeding.
pub fn run(
    clock: &impl Clock,
    generator: &RandomCostGenerator,
    expected_year: Option<i32>,
) -> SelfCheckReport {
    let actual = clock.current_year();
    let year = match expected_year {
        None => YearCheck::Unchecked { actual },
        Some(expected) if expected == actual => YearCheck::Matches { year: actual },
        Some(expected) => YearCheck::Mismatch { expected, actual },
    };

    let report = SelfCheckReport {
        year,
        seed_initialized: generator.is_seed_initialized(),
    };
    if report.passed() {
        tracing::debug!(?report, "self-check passed");
    } else {
        tracing::warn!(?report, "self-check failed");
    }
    report
}
