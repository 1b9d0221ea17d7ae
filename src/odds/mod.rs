use std::fmt;

use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

mod error;
pub use error::OddsError;
#[cfg(test)]
pub(crate) use error::MalformedEntryError;

mod parse;

/// Every table is measured against this many points.
pub const TOTAL_WEIGHT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub weight: u32,
}

impl Outcome {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// An ordered, weighted outcome table.
///
/// Entry *i* owns the half-open interval
/// `[cumulative_before_i, cumulative_before_i + weight_i)` of `[0, 100)`,
/// so order only matters as the boundary between neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcomes(Vec<Outcome>);

impl Outcomes {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }

    /// Parses and validates a `name=weight; name=weight` list.
    pub fn parse(spec: &str) -> Result<Self, OddsError> {
        let outcomes = Self(parse::parse_entries(spec)?);
        outcomes.validate()?;
        Ok(outcomes)
    }

    pub fn validate(&self) -> Result<(), OddsError> {
        if self.0.is_empty() {
            return Err(OddsError::EmptyTable);
        }

        let mut total: u64 = 0;
        for outcome in &self.0 {
            if outcome.name.trim().is_empty() {
                return Err(OddsError::blank_name());
            }

            total += u64::from(outcome.weight);
        }

        if total != TOTAL_WEIGHT {
            return Err(OddsError::WeightMismatch(total));
        }

        Ok(())
    }

    /// Draws an outcome name using the operating system's random source.
    #[instrument(skip_all)]
    pub fn draw(&self) -> &str {
        let sampled = OsRng.gen_range(0..TOTAL_WEIGHT);
        trace!(sampled);
        self.outcome_at(sampled)
    }

    pub fn outcome_at(&self, sampled: u64) -> &str {
        let mut cumulative: u64 = 0;

        for outcome in &self.0 {
            cumulative += u64::from(outcome.weight);

            if sampled < cumulative {
                return &outcome.name;
            }
        }

        // only reachable if the table skipped validation
        self.0.last().map_or("", |outcome| outcome.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.0.iter()
    }
}

impl Default for Outcomes {
    fn default() -> Self {
        Self(vec![
            Outcome::new("powers, curse", 25),
            Outcome::new("powers, blessing", 25),
            Outcome::new("no powers", 50),
        ])
    }
}

impl<'a> IntoIterator for &'a Outcomes {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the table as a markdown bullet list.
impl fmt::Display for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for outcome in &self.0 {
            if !first {
                f.write_str("\n")?;
            }
            first = false;

            write!(f, "- **{}**: {}%", outcome.name, outcome.weight)?;
        }

        Ok(())
    }
}

/// Rolls a d100, independently of any outcome draw.
pub fn roll_d100() -> u8 {
    OsRng.gen_range(1..=100)
}
