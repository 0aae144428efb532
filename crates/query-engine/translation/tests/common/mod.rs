use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata;
use query_engine_translation::translation;

/// Translate the request stored in `tests/goldenfiles/<testname>.json`.
pub fn test_translation(
    testname: &str,
) -> Result<translation::execution_plan::ExecutionPlan, translation::error::Error> {
    let path = PathBuf::from("tests/goldenfiles").join(format!("{testname}.json"));
    let request = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    translation::query::translate(&metadata::Metadata::new(), request)
}
