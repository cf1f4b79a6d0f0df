use tracing::{error, info, warn};

use crate::db::{MatchQuery, MatchStore};
use crate::error::ApiError;

const PROBE_COLUMNS: [&str; 3] = ["id", "home_team", "away_team"];
const PROBE_LIMIT: usize = 5;

/// Result of one read attempt with one credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Ok { rows: usize },
    Timeout,
    Failed { reason: String },
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok { .. })
    }

    fn from_error(err: &ApiError) -> Self {
        if err.is_timeout() {
            ProbeOutcome::Timeout
        } else {
            ProbeOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

/// What the pair of probes says about read access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDiagnosis {
    /// Restricted reads work
    Healthy,
    /// Elevated reads work but restricted ones do not: a row-level security
    /// policy for anonymous SELECT is missing
    MissingAnonReadPolicy,
    /// Restricted reads fail and the elevated key was not supplied
    AnonFailedServiceUntested,
    /// Both fail: network or backend trouble
    Unreachable,
}

impl AccessDiagnosis {
    pub fn from_probes(anon: &ProbeOutcome, service: Option<&ProbeOutcome>) -> Self {
        if anon.is_ok() {
            return AccessDiagnosis::Healthy;
        }

        match service {
            Some(outcome) if outcome.is_ok() => AccessDiagnosis::MissingAnonReadPolicy,
            Some(_) => AccessDiagnosis::Unreachable,
            None => AccessDiagnosis::AnonFailedServiceUntested,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            AccessDiagnosis::Healthy => "Anonymous queries work, no RLS problem",
            AccessDiagnosis::MissingAnonReadPolicy => {
                "Service key works but anonymous key fails: RLS is enabled without a policy \
                 for anonymous read. Add an RLS policy allowing anonymous SELECT on matches"
            }
            AccessDiagnosis::AnonFailedServiceUntested => {
                "Anonymous key fails; set SUPABASE_SERVICE_KEY to tell RLS apart from an outage"
            }
            AccessDiagnosis::Unreachable => {
                "Both keys fail, likely a network or backend issue"
            }
        }
    }
}

/// Read a handful of rows with whatever credential the store holds
pub async fn probe<S: MatchStore>(store: &S, credential: &str) -> ProbeOutcome {
    info!("Testing query with {} key...", credential);
    let query = MatchQuery::select(&PROBE_COLUMNS).limit(PROBE_LIMIT);

    match store.fetch_matches(&query).await {
        Ok(rows) => {
            info!("SUCCESS: {} key read {} matches", credential, rows.len());
            ProbeOutcome::Ok { rows: rows.len() }
        }
        Err(e) => {
            let outcome = ProbeOutcome::from_error(&e);
            match &outcome {
                ProbeOutcome::Timeout => error!("TIMEOUT: {} key query timed out", credential),
                _ => error!("FAILED: {} key query: {}", credential, e),
            }
            outcome
        }
    }
}

/// Probe with the restricted key, then the elevated one if supplied, and diagnose
pub async fn check_access<A, S>(anon: &A, service: Option<&S>) -> AccessDiagnosis
where
    A: MatchStore,
    S: MatchStore,
{
    let anon_outcome = probe(anon, "ANON").await;

    let service_outcome = match service {
        Some(store) => Some(probe(store, "SERVICE").await),
        None => {
            warn!("Skipping service key test (SUPABASE_SERVICE_KEY not set)");
            None
        }
    };

    let diagnosis = AccessDiagnosis::from_probes(&anon_outcome, service_outcome.as_ref());
    match diagnosis {
        AccessDiagnosis::Healthy => info!("DIAGNOSIS: {}", diagnosis.describe()),
        _ => error!("DIAGNOSIS: {}", diagnosis.describe()),
    }

    diagnosis
}
