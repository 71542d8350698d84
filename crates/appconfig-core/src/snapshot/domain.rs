//! Default application-domain derivation.
//!
//! A snapshot votes on its default domain using the `appdomain` key reported
//! by `simple` records. Parameter and endpoint records never take part.

use crate::collection::{first_seen, RecordCollection};
use crate::model::{Record, RecordKind};

/// Key under which hosts report their application domain
pub const DOMAIN_KEY: &str = "appdomain";

/// Default when no domain, or only an empty one, was reported
pub const NOT_APPLICABLE: &str = "NA";

/// Default when simple records disagree on the domain
pub const MULTIPLE: &str = "MULTIPLE";

/// Derive the default application domain for a set of records.
///
/// | distinct reported values | result       |
/// |--------------------------|--------------|
/// | none                     | `NA`         |
/// | one, empty               | `NA`         |
/// | one, non-empty `X`       | `X`          |
/// | two or more              | `MULTIPLE`   |
pub fn default_application_domain(records: &RecordCollection) -> String {
    let reported = first_seen(
        records
            .iter()
            .filter(|record| record.kind() == RecordKind::Simple && record.has_key(DOMAIN_KEY))
            .map(Record::value),
    );

    match reported.as_slice() {
        [] | [""] => NOT_APPLICABLE.to_string(),
        [single] => single.to_string(),
        _ => MULTIPLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_record(kind: &str, value: &str) -> Record {
        Record::new(kind, "pkg", DOMAIN_KEY, value)
    }

    #[test]
    fn test_no_reported_domain_is_na() {
        let records: RecordCollection = vec![Record::new("simple", "pkg", "node", "n1")].into();
        assert_eq!(default_application_domain(&records), NOT_APPLICABLE);
        assert_eq!(
            default_application_domain(&RecordCollection::new()),
            NOT_APPLICABLE
        );
    }

    #[test]
    fn test_single_empty_domain_is_na() {
        let records: RecordCollection = vec![domain_record("simple", "")].into();
        assert_eq!(default_application_domain(&records), NOT_APPLICABLE);
    }

    #[test]
    fn test_single_domain_wins() {
        let records: RecordCollection = vec![
            domain_record("simple", "X"),
            domain_record("simple", "X"),
        ]
        .into();
        assert_eq!(default_application_domain(&records), "X");
    }

    #[test]
    fn test_distinct_domains_are_multiple() {
        let records: RecordCollection =
            vec![domain_record("simple", "X"), domain_record("simple", "Y")].into();
        assert_eq!(default_application_domain(&records), MULTIPLE);
    }

    #[test]
    fn test_empty_plus_value_is_multiple() {
        let records: RecordCollection =
            vec![domain_record("simple", ""), domain_record("simple", "X")].into();
        assert_eq!(default_application_domain(&records), MULTIPLE);
    }

    #[test]
    fn test_non_simple_records_do_not_vote() {
        let records: RecordCollection = vec![
            domain_record("parameter", "P"),
            domain_record("endpoint", "E"),
            domain_record("simple", "X"),
        ]
        .into();
        assert_eq!(default_application_domain(&records), "X");
    }
}
