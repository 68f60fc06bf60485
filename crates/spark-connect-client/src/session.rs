use std::fmt::{Debug, Display};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use log::debug;
use spark_connect_common::config::{ClientConfig, DEFAULT_SPARK_CONNECT_PORT};
use spark_connect_common::spec::{QueryPlan, Relation};
use url::Url;
use uuid::Uuid;

use crate::dataframe::DataFrame;
use crate::error::{SparkError, SparkResult};
use crate::reader::DataFrameReader;

const SPARK_CONNECT_SCHEME: &str = "sc";
const DEFAULT_REMOTE: &str = "sc://localhost:15002";
const DEFAULT_USER_AGENT: &str = "spark-connect-rs";

/// A handle to a Spark Connect session.
///
/// The handle is cheap to clone and all clones refer to the same session.
/// Readers and DataFrames keep a clone so that the plans they build can later
/// be submitted to the session that created them. The session itself never
/// holds on to readers or DataFrames.
#[derive(Clone)]
pub struct SparkSession {
    inner: Arc<SparkSessionInner>,
}

struct SparkSessionInner {
    session_id: String,
    user_id: Option<String>,
    user_agent: String,
    remote: Url,
    next_plan_id: AtomicI64,
}

impl Debug for SparkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkSession")
            .field("session_id", &self.inner.session_id)
            .field("user_id", &self.inner.user_id)
            .field("remote", &self.inner.remote.as_str())
            .finish()
    }
}

impl Display for SparkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(user_id) = &self.inner.user_id {
            write!(f, "{}@{}", user_id, self.inner.session_id)
        } else {
            write!(f, "{}", self.inner.session_id)
        }
    }
}

impl SparkSession {
    pub fn builder() -> SparkSessionBuilder {
        SparkSessionBuilder::default()
    }

    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.inner.user_id.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub fn remote(&self) -> &Url {
        &self.inner.remote
    }

    pub fn host(&self) -> &str {
        // The builder rejects remote URLs without a host.
        self.inner.remote.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> u16 {
        self.inner.remote.port().unwrap_or(DEFAULT_SPARK_CONNECT_PORT)
    }

    /// Returns a new reader for building DataFrames from tables or files.
    pub fn read(&self) -> DataFrameReader {
        DataFrameReader::new(self.clone())
    }

    pub fn table(&self, name: impl Into<String>) -> SparkResult<DataFrame> {
        self.read().table(name)
    }

    /// Wraps the relation in a new DataFrame bound to this session.
    /// Every DataFrame gets a plan ID that is unique within the session.
    pub fn new_data_frame(&self, relation: Relation) -> DataFrame {
        let plan_id = self.inner.next_plan_id.fetch_add(1, Ordering::Relaxed);
        DataFrame::new(self.clone(), QueryPlan::new(relation).with_plan_id(plan_id))
    }

    /// Returns whether the two handles refer to the same session.
    pub fn same_session(&self, other: &SparkSession) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SparkSessionBuilder {
    remote: Option<String>,
    user_id: Option<String>,
    user_agent: Option<String>,
    session_id: Option<String>,
}

impl SparkSessionBuilder {
    /// Sets the Spark Connect endpoint in the `sc://host[:port]` form.
    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the session ID, which must be a UUID.
    /// A random session ID is generated if this is not called.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Replaces the remote, user ID, and user agent with the values in the configuration.
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.remote = Some(config.remote.clone());
        self.user_id = config.user_id.clone();
        self.user_agent = Some(config.user_agent.clone());
        self
    }

    pub fn build(self) -> SparkResult<SparkSession> {
        let Self {
            remote,
            user_id,
            user_agent,
            session_id,
        } = self;
        let remote = parse_remote(remote.as_deref().unwrap_or(DEFAULT_REMOTE))?;
        let session_id = match session_id {
            Some(x) => Uuid::parse_str(&x)
                .map_err(|e| SparkError::invalid(format!("session ID {x}: {e}")))?
                .to_string(),
            None => Uuid::new_v4().to_string(),
        };
        let session = SparkSession {
            inner: Arc::new(SparkSessionInner {
                session_id,
                user_id: user_id.filter(|x| !x.is_empty()),
                user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                remote,
                next_plan_id: AtomicI64::new(0),
            }),
        };
        debug!(
            "created Spark session {session} for {}:{}",
            session.host(),
            session.port()
        );
        Ok(session)
    }
}

fn parse_remote(remote: &str) -> SparkResult<Url> {
    let url = Url::parse(remote)?;
    if url.scheme() != SPARK_CONNECT_SCHEME {
        return Err(SparkError::invalid(format!(
            "remote URL must use the {SPARK_CONNECT_SCHEME}:// scheme: {remote}"
        )));
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(SparkError::missing(format!("host in remote URL: {remote}"))),
    }
}
