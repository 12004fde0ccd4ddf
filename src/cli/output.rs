use serde::Serialize;

/// Envelope for `--format json` output
#[derive(Debug, Serialize)]
pub struct CommandOutput<T>
where
    T: Serialize,
{
    pub status: String,
    pub result: Option<T>,
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn ok(result: T) -> Self {
        Self {
            status: "ok".to_string(),
            result: Some(result),
            errors: None,
        }
    }

    pub fn error(errors: Vec<String>) -> Self {
        Self {
            status: "error".to_string(),
            result: None,
            errors: Some(errors),
        }
    }
}

/// Result of a single-line lookup
#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub direction: &'static str,
    pub line: u32,
    pub matches: Vec<u32>,
}
