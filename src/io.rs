use crate::model::{Person, Roster, Table};
use crate::workbook::Workbook;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Import du staff depuis CSV: header `name[,children]`, enfants séparés par des virgules
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_staff_csv(file)
}

pub fn read_staff_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut out: Vec<Person> = Vec::new();
    let mut seen = BTreeSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid staff row (empty name)");
        }
        if !seen.insert(name.to_string()) {
            bail!("duplicate staff name: {name}");
        }
        let children = rec.get(1).map(parse_children).unwrap_or_default();
        out.push(Person {
            name: name.to_string(),
            children,
        });
    }
    Ok(out)
}

fn parse_children(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Import des patrouilles: une colonne par patrouille, en-tête = nom de la patrouille
pub fn import_patrols_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_patrols_csv(file)
}

pub fn read_patrols_csv<R: Read>(reader: R) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let patrols: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for patrol in patrols.iter().filter(|p| !p.is_empty()) {
        if out.insert(patrol.clone(), Vec::new()).is_some() {
            bail!("duplicate patrol column: {patrol}");
        }
    }

    for rec in rdr.records() {
        let rec = rec?;
        for (idx, cell) in rec.iter().enumerate() {
            let member = cell.trim();
            if member.is_empty() {
                continue;
            }
            let patrol = patrols
                .get(idx)
                .filter(|p| !p.is_empty())
                .with_context(|| format!("member {member} has no patrol column"))?;
            if let Some(members) = out.get_mut(patrol) {
                members.push(member.to_string());
            }
        }
    }
    Ok(out)
}

/// Charge le roster complet (staff + patrouilles optionnelles)
pub fn load_roster<P: AsRef<Path>, Q: AsRef<Path>>(
    staff: P,
    patrols: Option<Q>,
) -> anyhow::Result<Roster> {
    let staff = import_staff_csv(staff)?;
    let patrol_members = match patrols {
        Some(path) => import_patrols_csv(path)?,
        None => BTreeMap::new(),
    };
    Ok(Roster {
        staff,
        patrol_members,
    })
}

/// Écrit un tableau en CSV (en-tête puis lignes)
pub fn write_table_csv<W: Write>(writer: W, table: &Table) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().flexible(true).from_writer(writer);
    for record in table.records() {
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_table_csv<P: AsRef<Path>>(path: P, table: &Table) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_table_csv(file, table)
}

/// Export d'un CSV par tableau dans `dir`, nommé d'après le titre du tableau
pub fn export_workbook_csv<P: AsRef<Path>>(dir: P, workbook: &Workbook) -> anyhow::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))?;
    let mut written = Vec::new();
    for table in workbook.tables() {
        let path = dir.join(table_file_name(table));
        export_table_csv(&path, table)?;
        written.push(path);
    }
    Ok(written)
}

pub fn table_file_name(table: &Table) -> String {
    let safe: String = table
        .title
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
        .collect();
    format!("{safe}.csv")
}
