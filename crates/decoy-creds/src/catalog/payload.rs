//! Classic injection strings.
//!
//! Payloads are fixed literals. The only randomness is which one is picked.

use crate::error::SourceError;
use crate::source::RandomSource;

/// SQL-injection login-bypass strings.
pub const SQL_INJECTIONS: &[&str] = &[
    "admin' OR '1'='1",
    "admin'--",
    "' OR 1=1--",
    "admin' UNION SELECT NULL--",
    "' OR 'x'='x",
    "admin') OR ('1'='1",
];

/// OS command-injection strings.
pub const COMMAND_INJECTIONS: &[&str] = &[
    "admin; cat /etc/passwd",
    "admin | whoami",
    "admin && id",
    "admin`whoami`",
    "admin$(id)",
];

/// Picks one payload uniformly from the SQL and command catalogs combined.
///
/// # Errors
///
/// Returns [`SourceError`] only if both catalogs are empty.
///
/// # Example
///
/// ```
/// use decoy_creds::RandomSource;
/// use decoy_creds::catalog::payload::{COMMAND_INJECTIONS, SQL_INJECTIONS, generate_payload};
///
/// let mut source = RandomSource::seeded(3);
/// let payload = generate_payload(&mut source).expect("payload");
/// assert!(SQL_INJECTIONS.contains(&payload) || COMMAND_INJECTIONS.contains(&payload));
/// ```
pub fn generate_payload(source: &mut RandomSource) -> Result<&'static str, SourceError> {
    let index = source.index(SQL_INJECTIONS.len() + COMMAND_INJECTIONS.len())?;
    SQL_INJECTIONS
        .iter()
        .chain(COMMAND_INJECTIONS)
        .nth(index)
        .copied()
        .ok_or(SourceError::EmptyCollection)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_payload_is_reachable() {
        let mut source = RandomSource::seeded(9);
        let seen: HashSet<&str> = (0..1_000)
            .map(|_| generate_payload(&mut source).expect("payload"))
            .collect();

        assert_eq!(seen.len(), SQL_INJECTIONS.len() + COMMAND_INJECTIONS.len());
    }
}
