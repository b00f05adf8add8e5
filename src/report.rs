use serde::Serialize;
use uuid::Uuid;

use crate::file::RewriteReport;
use crate::pattern::PairLocation;

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Outcome of one run, as printed or serialized
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub success: bool,
    pub file: String,
    pub pairs_swapped: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub checksum_before: String,
    pub checksum_after: String,
    pub changed: bool,
    /// Where each swapped pair was in the original document
    pub pairs: Vec<PairLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    pub fn success(run_id: String, rewrite: &RewriteReport) -> Self {
        RunReport {
            run_id,
            success: true,
            file: rewrite.path.display().to_string(),
            pairs_swapped: rewrite.pairs_swapped(),
            bytes_before: rewrite.bytes_before,
            bytes_after: rewrite.bytes_after,
            checksum_before: rewrite.checksum_before.clone(),
            checksum_after: rewrite.checksum_after.clone(),
            changed: rewrite.changed(),
            pairs: rewrite.pairs.clone(),
            error: None,
        }
    }

    pub fn failure(run_id: String, file: String, error: String) -> Self {
        RunReport {
            run_id,
            success: false,
            file,
            pairs_swapped: 0,
            bytes_before: 0,
            bytes_after: 0,
            checksum_before: String::new(),
            checksum_after: String::new(),
            changed: false,
            pairs: Vec::new(),
            error: Some(error),
        }
    }

    /// Human-readable rendering
    pub fn to_human(&self) -> String {
        if self.success {
            format!(
                "Swapped {} coordinate pair(s) in {}\nChecksum: {} -> {}",
                self.pairs_swapped, self.file, self.checksum_before, self.checksum_after
            )
        } else {
            format!("Error: {}", self.error.as_deref().unwrap_or("Unknown error"))
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
