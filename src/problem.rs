//! The optimization problem a client posts.
//!
//! Every string field is a fragment of solver-script source and is spliced
//! into the generated script as-is. Nothing here checks that the fragments
//! are valid JuMP: the caller is trusted.

use serde::{Deserialize, Serialize};

/// A decision variable. `bounds` is the full declaration, e.g. `0 <= x <= 10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub bounds: String,
}

/// A named constraint expression, e.g. `c1`, `x + y <= 4`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    pub constraint: String,
}

/// One request's problem description. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSpec {
    /// Solver package to import, e.g. `GLPK`.
    pub solver: String,
    /// Optimizer constructor, e.g. `GLPK.Optimizer`.
    pub optimizer: String,
    /// `Min` or `Max`.
    pub sense: String,
    #[serde(rename = "func")]
    pub function: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl OptimizationSpec {
    /// Decode a request body. Unknown keys are ignored; the four scalar
    /// fields are required.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_problem() {
        let body = br#"{
            "solver": "GLPK",
            "optimizer": "GLPK.Optimizer",
            "sense": "Max",
            "func": "x + y",
            "variables": [
                {"name": "x", "bounds": "0 <= x <= 2"},
                {"name": "y", "bounds": "y >= 0"}
            ],
            "constraints": [{"name": "c1", "constraint": "x + y <= 4"}]
        }"#;

        let spec = OptimizationSpec::from_json(body).unwrap();
        assert_eq!(spec.solver, "GLPK");
        assert_eq!(spec.function, "x + y");
        assert_eq!(spec.variables.len(), 2);
        assert_eq!(spec.variables[1].name, "y");
        assert_eq!(spec.constraints[0].constraint, "x + y <= 4");
    }

    #[test]
    fn sequences_default_to_empty() {
        let body = br#"{"solver": "GLPK", "optimizer": "GLPK.Optimizer", "sense": "Min", "func": "0"}"#;
        let spec = OptimizationSpec::from_json(body).unwrap();
        assert!(spec.variables.is_empty());
        assert!(spec.constraints.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let body = br#"{
            "solver": "GLPK", "optimizer": "GLPK.Optimizer", "sense": "Min", "func": "x",
            "comment": "ignored",
            "variables": [{"name": "x", "bounds": "x >= 1", "kind": "continuous"}]
        }"#;
        let spec = OptimizationSpec::from_json(body).unwrap();
        assert_eq!(spec.variables[0].bounds, "x >= 1");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let body = br#"{"solver": "GLPK", "optimizer": "GLPK.Optimizer", "sense": "Min"}"#;
        let err = OptimizationSpec::from_json(body).unwrap_err();
        assert!(err.to_string().contains("func"));
    }

    #[test]
    fn variable_without_bounds_is_rejected() {
        let body = br#"{
            "solver": "GLPK", "optimizer": "GLPK.Optimizer", "sense": "Min", "func": "x",
            "variables": [{"name": "x"}]
        }"#;
        assert!(OptimizationSpec::from_json(body).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(OptimizationSpec::from_json(b"{not json").is_err());
        assert!(OptimizationSpec::from_json(b"").is_err());
    }
}
