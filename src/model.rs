use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Personne du staff (nom unique + patrouilles de ses enfants)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub children: BTreeSet<String>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            children: BTreeSet::new(),
        }
    }

    pub fn with_children<N, I, C>(name: N, children: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Vrai si un enfant de la personne fait partie de `patrol`.
    pub fn has_child_in(&self, patrol: &str) -> bool {
        self.children.contains(patrol)
    }
}

/// Roster complet chargé pour un run : staff + composition des patrouilles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub staff: Vec<Person>,
    #[serde(default)]
    pub patrol_members: BTreeMap<String, Vec<String>>,
}

impl Roster {
    /// Staff non exclus (pool repas).
    pub fn all_eligible<'a>(&'a self, excluded: &BTreeSet<String>) -> Vec<&'a Person> {
        self.staff
            .iter()
            .filter(|p| !excluded.contains(&p.name))
            .collect()
    }

    /// Staff non exclus et pas « repas seulement » (pool corvées).
    pub fn duty_eligible<'a>(
        &'a self,
        excluded: &BTreeSet<String>,
        eating_only: &BTreeSet<String>,
    ) -> Vec<&'a Person> {
        self.staff
            .iter()
            .filter(|p| !excluded.contains(&p.name) && !eating_only.contains(&p.name))
            .collect()
    }
}

/// Ligne de tableau : libellé (repas, jour) + cellules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub cells: Vec<String>,
}

/// Tableau de sortie, prêt à être écrit par l'adaptateur (CSV, JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// `corner` est l'intitulé de la colonne des libellés ("Meal", "Day").
    pub fn new<T, C, I, S>(title: T, corner: C, columns: I) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = vec![corner.into()];
        header.extend(columns.into_iter().map(Into::into));
        Self {
            title: title.into(),
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row<L: Into<String>>(&mut self, label: L, cells: Vec<String>) {
        self.rows.push(Row {
            label: label.into(),
            cells,
        });
    }

    /// Intitulés des colonnes de données (sans la colonne des libellés).
    pub fn columns(&self) -> &[String] {
        self.header.get(1..).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(String::as_str)
    }

    /// Forme tabulaire brute : ligne 0 = en-tête, puis `(libellé, cellules...)`.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.header.clone());
        for row in &self.rows {
            let mut record = Vec::with_capacity(row.cells.len() + 1);
            record.push(row.label.clone());
            record.extend(row.cells.iter().cloned());
            out.push(record);
        }
        out
    }

    /// Noms présents dans le tableau (cellules découpées sur ", ", annotations retirées).
    pub fn assigned_names(&self) -> Vec<String> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .flat_map(|cell| cell.split(", "))
            .map(strip_annotation)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

fn strip_annotation(display: &str) -> &str {
    match display.find(" (with child ") {
        Some(pos) => &display[..pos],
        None => display,
    }
}
