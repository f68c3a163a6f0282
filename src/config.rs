use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Listes de référence d'un camp (repas, rôles, jours, exclusions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampConfig {
    pub meals: Vec<String>,
    #[serde(default = "default_duty_roles")]
    pub duty_roles: Vec<String>,
    #[serde(default)]
    pub scout_roles: Vec<String>,
    #[serde(default)]
    pub staff_roles: Vec<String>,
    #[serde(default)]
    pub latrine_days: Vec<String>,
    pub patrols: Vec<String>,
    /// Staff exclus de tout planning
    #[serde(default)]
    pub excluded: BTreeSet<String>,
    /// Staff qui mangent avec les patrouilles mais sans corvée
    #[serde(default)]
    pub eating_only: BTreeSet<String>,
    /// Staff retirés du seul planning des repas
    #[serde(default)]
    pub eating_excluded: BTreeSet<String>,
}

pub fn default_duty_roles() -> Vec<String> {
    ["Head Cook", "Asst. Cook", "Fire/Water", "Dishwasher", "Asst. Dishwasher"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            meals: Vec::new(),
            duty_roles: default_duty_roles(),
            scout_roles: Vec::new(),
            staff_roles: Vec::new(),
            latrine_days: Vec::new(),
            patrols: Vec::new(),
            excluded: BTreeSet::new(),
            eating_only: BTreeSet::new(),
            eating_excluded: BTreeSet::new(),
        }
    }
}

impl CampConfig {
    /// Validation de forme uniquement : une liste vide reste acceptée ici, le
    /// builder qui en a besoin la refusera sans bloquer les autres tableaux.
    pub fn validate(&self) -> Result<()> {
        let lists: [(&str, &[String]); 6] = [
            ("meals", self.meals.as_slice()),
            ("duty_roles", self.duty_roles.as_slice()),
            ("scout_roles", self.scout_roles.as_slice()),
            ("staff_roles", self.staff_roles.as_slice()),
            ("latrine_days", self.latrine_days.as_slice()),
            ("patrols", self.patrols.as_slice()),
        ];
        for (what, list) in lists {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                bail!("{what} contains a blank entry");
            }
            let unique: BTreeSet<&String> = list.iter().collect();
            if unique.len() != list.len() {
                bail!("{what} contains duplicate entries");
            }
        }
        if let Some(name) = self.excluded.intersection(&self.eating_only).next() {
            bail!("{name} cannot be both excluded and eating-only");
        }
        Ok(())
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<CampConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: CampConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
