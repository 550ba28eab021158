use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Three-way indicator chosen by the sign of the drawer variance
/// (total counted minus expected amount). Rendering picks a color
/// pair from this state; the mapping lives in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceState {
    /// Drawer is short: variance < 0
    Short,
    /// Drawer is over: variance > 0
    Over,
    /// Drawer matches the expected amount exactly
    Balanced,
}

impl VarianceState {
    /// Classify a variance value that has already been rounded to cents,
    /// so a displayed $0.00 never renders with a non-balanced color.
    pub fn from_variance(variance: f64) -> Self {
        if variance < 0.0 {
            VarianceState::Short
        } else if variance > 0.0 {
            VarianceState::Over
        } else {
            VarianceState::Balanced
        }
    }
}

/// One saved drawer count, as persisted to the snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerSnapshot {
    /// Snapshot ID (UUID v4)
    pub id: String,
    /// Raw denomination counts, in the same order as the denomination table
    pub counts: Vec<f64>,
    /// Expected amount entered by the user
    pub expected_amount: f64,
    /// Cash taken out of the drawer
    pub cash_taken: f64,
    /// Value left in the new drawer
    pub new_drawer: f64,
    /// Save timestamp (RFC 3339, UTC)
    pub saved_at: String,
}

impl DrawerSnapshot {
    /// Build a snapshot of the current form, stamped with a fresh id and
    /// the current UTC time.
    pub fn new(counts: Vec<f64>, expected_amount: f64, cash_taken: f64, new_drawer: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            counts,
            expected_amount,
            cash_taken,
            new_drawer,
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Result of an export action (CSV file or printable report), carried
/// back to the UI for the success/error banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    /// Full path of the file that was written
    pub file_path: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_state_follows_sign() {
        assert_eq!(VarianceState::from_variance(-0.20), VarianceState::Short);
        assert_eq!(VarianceState::from_variance(3.75), VarianceState::Over);
        assert_eq!(VarianceState::from_variance(0.0), VarianceState::Balanced);
    }

    #[test]
    fn snapshot_serializes_round_trip() {
        let snapshot = DrawerSnapshot::new(vec![10.0, 4.0], 0.50, 25.0, 250.0);
        assert!(!snapshot.id.is_empty());
        assert!(snapshot.saved_at.ends_with('Z'));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DrawerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
