pub mod access;
pub mod inspect;
pub mod migrate;
pub mod populate;
pub mod probe;

#[cfg(test)]
pub(crate) mod testing;

pub use access::{check_access, AccessDiagnosis, ProbeOutcome};
pub use inspect::{check_odds_format, FormatReport};
pub use migrate::{MigrateOddsJob, MigrationSummary};
pub use populate::{PopulateMatchesJob, PopulateSettings, PopulateSummary};
pub use probe::probe_fixture_odds;
