//! Remote skills resolver with placeholder and fallback lists.
//!
//! The canonical skill list lives at a remote resource that may be slow,
//! absent, or wrong. `resolve` degrades to the static fallback list instead
//! of surfacing an error; the provenance tag says which source actually
//! supplied the data and is for diagnostics only - consumers treat the list
//! identically regardless.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, SbError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which source supplied a resolved skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Provisional data, safe to reconcile against optimistically.
    Placeholder,
    /// Static built-in list substituted after a resolution failure.
    Fallback,
    /// Remote-confirmed data.
    Live,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placeholder => write!(f, "placeholder"),
            Self::Fallback => write!(f, "fallback"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// A resolved canonical list plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub skills: Vec<String>,
    pub provenance: Provenance,
}

/// Resolves the canonical skill list from a remote resource.
pub struct SkillsResolver {
    resource: Option<String>,
    fallback: Vec<String>,
    placeholder: Vec<String>,
    timeout: Duration,
}

impl SkillsResolver {
    pub fn new(
        resource: Option<String>,
        fallback: Vec<String>,
        placeholder: Vec<String>,
    ) -> Self {
        Self {
            resource,
            fallback,
            placeholder,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Fetch the canonical list from the remote resource.
    ///
    /// Transport failures, non-success statuses, and unparseable bodies all
    /// degrade to the fallback list; only the provenance tag records that the
    /// remote data never arrived.
    pub fn resolve(&self) -> Resolution {
        let Some(resource) = self.resource.as_deref() else {
            debug!(target: "resolver", "no resource configured; using fallback");
            return Resolution {
                skills: self.fallback.clone(),
                provenance: Provenance::Fallback,
            };
        };

        match self.fetch(resource) {
            Ok(skills) => {
                debug!(target: "resolver", count = skills.len(), "remote skills resolved");
                Resolution {
                    skills,
                    provenance: Provenance::Live,
                }
            }
            Err(err) => {
                warn!(target: "resolver", resource, %err, "resolution failed; using fallback");
                Resolution {
                    skills: self.fallback.clone(),
                    provenance: Provenance::Fallback,
                }
            }
        }
    }

    /// The provisional list, for reconciling before (or without) a fetch.
    pub fn placeholder(&self) -> Resolution {
        Resolution {
            skills: self.placeholder.clone(),
            provenance: Provenance::Placeholder,
        }
    }

    /// Probe the remote resource without consuming the result.
    ///
    /// `None` when no resource is configured.
    pub fn probe(&self) -> Option<bool> {
        let resource = self.resource.as_deref()?;
        Some(self.fetch(resource).is_ok())
    }

    fn fetch(&self, url: &str) -> Result<Vec<String>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| SbError::ResolverUnavailable(format!("build client: {err}")))?;

        let response = client
            .get(url)
            .send()
            .map_err(|err| SbError::ResolverUnavailable(format!("fetch {url}: {err}")))?;

        if !response.status().is_success() {
            return Err(SbError::ResolverUnavailable(format!(
                "fetch {url}: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<String>>()
            .map_err(|err| SbError::ResolverUnavailable(format!("parse skills body: {err}")))
    }
}
