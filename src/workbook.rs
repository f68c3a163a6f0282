use crate::model::Table;
use crate::scheduler::{SchedError, Underfill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tableau non produit à cause d'une erreur bloquante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableError {
    pub table: String,
    pub message: String,
}

impl TableError {
    pub fn new<T: Into<String>>(table: T, err: &SchedError) -> Self {
        Self {
            table: table.into(),
            message: err.to_string(),
        }
    }
}

/// Ensemble des tableaux d'un run, avec les créneaux incomplets et les erreurs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub eating: Option<Table>,
    #[serde(default)]
    pub staff_duty: Option<Table>,
    #[serde(default)]
    pub patrol_duty: BTreeMap<String, Table>,
    #[serde(default)]
    pub latrine: Option<Table>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub underfills: Vec<Underfill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TableError>,
}

impl Workbook {
    /// Tableaux produits, dans l'ordre repas, cuisine, patrouilles, latrines.
    pub fn tables(&self) -> Vec<&Table> {
        let mut out: Vec<&Table> = Vec::new();
        out.extend(self.eating.iter());
        out.extend(self.staff_duty.iter());
        out.extend(self.patrol_duty.values());
        out.extend(self.latrine.iter());
        out
    }

    /// Vrai si tout a été produit et tous les créneaux sont pleins.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty() && self.underfills.is_empty()
    }
}
