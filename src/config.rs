/*
Solver configuration.

A small JSON file, loaded with `serde_json`, one field at a time, falling
back to a documented default when a key is absent. Nearly every field has
a sensible default, so `SolverConfig` can be used straight from `Default`
without ever touching a file; the JSON loader is a convenience for the
demonstration binary rather than the only way to configure the solver.

`enable_cdcl_checks` is a field here rather than a process-wide global: a
toggle living on the solver is easier to reason about and to test than
`static mut`.
*/

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    Distributive,
    Tseytin,
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub normal_form: NormalForm,
    pub enable_cdcl_checks: bool,
    pub cdcl_seed: u64,
    pub deadline_millis: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { normal_form: NormalForm::Tseytin, enable_cdcl_checks: false, cdcl_seed: 0, deadline_millis: None }
    }
}

/// Loads a `SolverConfig` from a JSON file: read the whole file, pull each
/// key out with a documented default for anything missing. A malformed or
/// unreadable file is treated as trusted local input and will panic — this
/// is not on the CPL compile/solve path.
pub fn read_config_json(path: &Path) -> SolverConfig {
    let contents = fs::read_to_string(path).expect("config file should be readable");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("config file should be valid JSON");

    let normal_form = match json.get("normalForm").and_then(|v| v.as_str()) {
        Some("distributive") => NormalForm::Distributive,
        Some("tseytin") | None => NormalForm::Tseytin,
        Some(other) => panic!("unknown normalForm: {other}"),
    };
    let enable_cdcl_checks = json.get("enableCDCLChecks").and_then(|v| v.as_bool()).unwrap_or(false);
    let cdcl_seed = json.get("cdclSeed").and_then(|v| v.as_u64()).unwrap_or(0);
    let deadline_millis = json.get("deadlineMillis").and_then(|v| v.as_u64());

    SolverConfig { normal_form, enable_cdcl_checks, cdcl_seed, deadline_millis }
}
