use std::fmt::Display;

use spark_connect_common::spec::{QueryPlan, Relation};

use crate::error::SparkResult;
use crate::session::SparkSession;

/// An unevaluated DataFrame.
///
/// The DataFrame is immutable. It pairs the logical plan with the session that
/// is able to execute it. Operations on the DataFrame never modify the plan
/// but return a new DataFrame instead.
#[derive(Debug, Clone)]
pub struct DataFrame {
    session: SparkSession,
    plan: QueryPlan,
}

impl DataFrame {
    pub fn new(session: SparkSession, plan: QueryPlan) -> Self {
        Self { session, plan }
    }

    pub fn session(&self) -> &SparkSession {
        &self.session
    }

    pub fn plan(&self) -> &QueryPlan {
        &self.plan
    }

    pub fn relation(&self) -> &Relation {
        &self.plan.relation
    }

    pub fn plan_id(&self) -> Option<i64> {
        self.plan.plan_id
    }

    /// Returns the plan as pretty-printed JSON for debugging.
    pub fn plan_json(&self) -> SparkResult<String> {
        Ok(serde_json::to_string_pretty(&self.plan)?)
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.plan.relation {
            Relation::ReadTable { name } => write!(f, "DataFrame[table={name}]"),
            Relation::ReadByPath { path, format }
            | Relation::ReadByPathWithOptions { path, format, .. } => {
                let format = format.as_deref().unwrap_or("default");
                write!(f, "DataFrame[path={path}, format={format}]")
            }
        }
    }
}
