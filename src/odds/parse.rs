use tracing::{debug, instrument};

use super::{OddsError, Outcome};

/// Splits `name=weight; name=weight` into entries without validating the table.
#[instrument(level = "debug")]
pub(super) fn parse_entries(spec: &str) -> Result<Vec<Outcome>, OddsError> {
    let mut outcomes = Vec::new();

    for part in spec.split(';').map(str::trim).filter(|part| !part.is_empty()) {
        let (name, weight) = part.split_once('=').ok_or_else(OddsError::bad_format)?;
        let weight = weight.trim();

        if weight.is_empty() || !weight.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(OddsError::bad_weight(part));
        }

        let weight = weight.parse().map_err(|_| OddsError::bad_weight(part))?;

        outcomes.push(Outcome::new(name.trim(), weight));
    }

    debug!(count = outcomes.len(), "parsed odds entries");

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::odds::{MalformedEntryError, OddsError, Outcome, Outcomes};

    #[test]
    #[traced_test]
    fn parses_names_with_commas() {
        let outcomes =
            Outcomes::parse("powers, curse=25; powers, blessing=25; no powers=50").unwrap();

        assert_eq!(
            outcomes,
            Outcomes::new(vec![
                Outcome::new("powers, curse", 25),
                Outcome::new("powers, blessing", 25),
                Outcome::new("no powers", 50),
            ])
        );
    }

    #[test]
    fn skips_empty_parts() {
        let outcomes = Outcomes::parse(" ; heads = 50 ;; tails=50 ; ").unwrap();

        assert_eq!(
            outcomes,
            Outcomes::new(vec![Outcome::new("heads", 50), Outcome::new("tails", 50)])
        );
    }

    #[test]
    fn rejects_weight_mismatch() {
        assert_eq!(
            Outcomes::parse("a=60;b=60"),
            Err(OddsError::WeightMismatch(120))
        );
    }

    #[test]
    fn rejects_non_integer_weight() {
        assert_eq!(
            Outcomes::parse("a=five"),
            Err(OddsError::MalformedEntry(MalformedEntryError::BadWeight(
                "a=five".to_owned()
            )))
        );
    }

    #[test]
    fn rejects_negative_weight() {
        assert_eq!(
            Outcomes::parse("a=-5; b=105"),
            Err(OddsError::MalformedEntry(MalformedEntryError::BadWeight(
                "a=-5".to_owned()
            )))
        );
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            Outcomes::parse("a 100"),
            Err(OddsError::MalformedEntry(MalformedEntryError::BadFormat))
        );
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Outcomes::parse("=100"),
            Err(OddsError::MalformedEntry(MalformedEntryError::BlankName))
        );
    }

    #[test]
    fn rejects_empty_spec() {
        assert_eq!(Outcomes::parse(" ; "), Err(OddsError::EmptyTable));
    }

    #[test]
    fn overflowing_weight_is_malformed() {
        assert!(matches!(
            Outcomes::parse("a=99999999999"),
            Err(OddsError::MalformedEntry(MalformedEntryError::BadWeight(_)))
        ));
    }
}
