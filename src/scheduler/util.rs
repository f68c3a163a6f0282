use super::types::{SchedError, Underfill, UnderfillReason};
use crate::model::Person;

/// Patrouilles d'encadrement (ASPL) : exemptées de rotation.
pub(super) fn is_support_patrol(patrol: &str) -> bool {
    patrol.to_ascii_lowercase().contains("aspl")
}

/// Nom affiché, annoté quand la personne mange avec la patrouille de son enfant.
pub(super) fn display_name(person: &Person, patrol: &str) -> String {
    if person.has_child_in(patrol) {
        format!("{} (with child {})", person.name, patrol)
    } else {
        person.name.clone()
    }
}

pub(super) fn require_list(list: &[String], what: &'static str) -> Result<(), SchedError> {
    if list.is_empty() {
        return Err(SchedError::MissingReferenceData(what));
    }
    if list.iter().any(|entry| entry.trim().is_empty()) {
        return Err(SchedError::BlankReferenceEntry(what));
    }
    Ok(())
}

pub(super) fn underfill(
    table: &str,
    row: &str,
    column: &str,
    filled: usize,
    required: usize,
    reason: UnderfillReason,
) -> Underfill {
    tracing::warn!(
        table,
        row,
        column,
        filled,
        required,
        %reason,
        "slot left under-filled"
    );
    Underfill {
        table: table.to_owned(),
        row: row.to_owned(),
        column: column.to_owned(),
        filled,
        required,
        reason,
    }
}
