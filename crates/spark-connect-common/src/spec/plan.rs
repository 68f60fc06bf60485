use serde::{Deserialize, Serialize};

use crate::spec::relation::Relation;

/// Unresolved logical plan node submitted to the Spark Connect server.
///
/// Only read relations are modeled on the client for now. The plan ID is
/// assigned by the session so that the server can refer back to the node
/// (e.g. when resolving column references of a specific DataFrame).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPlan {
    pub relation: Relation,
    pub plan_id: Option<i64>,
}

impl QueryPlan {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            plan_id: None,
        }
    }

    pub fn with_plan_id(mut self, plan_id: i64) -> Self {
        self.plan_id = Some(plan_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_plan_json() -> Result<(), Box<dyn std::error::Error>> {
        let plan = QueryPlan::new(Relation::read_table("t")).with_plan_id(7);
        let json = serde_json::to_string(&plan)?;
        assert_eq!(json, r#"{"relation":{"readTable":{"name":"t"}},"planId":7}"#);
        let back: QueryPlan = serde_json::from_str(&json)?;
        assert_eq!(back, plan);
        Ok(())
    }
}
