//! Legacy approval-workflow gate.
//!
//! A row is usable only if it was approved (`validated_by` set) and never
//! voided (`void_by` empty). Void takes precedence over missing validation so
//! the reject reason names the actor who killed the record.

/// Outcome of the validated/voided check for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValidity {
    Valid,
    NotValidated,
    Void { actor: String },
}

impl RowValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, RowValidity::Valid)
    }

    /// Human-readable reject reason, `None` for valid rows.
    pub fn reject_reason(&self) -> Option<String> {
        match self {
            RowValidity::Valid => None,
            RowValidity::NotValidated => Some("Not Validated".to_string()),
            RowValidity::Void { actor } => Some(format!("Void By {actor}")),
        }
    }
}

/// Applies the approval gate to a row's workflow fields.
///
/// The literal `NULL` is the legacy export's spelling of an empty cell.
pub fn check_validity(validated_by: &str, void_by: &str) -> RowValidity {
    let void_by = void_by.trim();
    if !void_by.is_empty() && void_by != "NULL" {
        return RowValidity::Void {
            actor: void_by.to_string(),
        };
    }
    let validated_by = validated_by.trim();
    if validated_by.is_empty() || validated_by == "NULL" {
        return RowValidity::NotValidated;
    }
    RowValidity::Valid
}
