mod allocator;
mod duty;
mod eating;
mod latrine;
mod patrol;
mod types;
mod util;

pub use allocator::{
    pick_least_loaded_for_duty, pick_least_loaded_for_pair, LoadCounter, PairHistory,
};
pub use types::{SchedError, Underfill, UnderfillReason, EATING_PAIR_SIZE};

use crate::config::CampConfig;
use crate::model::{Person, Roster, Table};
use crate::workbook::{TableError, Workbook};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

pub const EATING_TITLE: &str = "Staff Eating Schedule";
pub const STAFF_DUTY_TITLE: &str = "Staff Duty Roster";
pub const LATRINE_TITLE: &str = "Latrine Duty";

/// À partir de ce nombre de membres, une patrouille tourne sur les rôles scouts.
pub const SCOUT_ROLES_MIN_MEMBERS: usize = 6;

/// Scheduler : porte la source aléatoire et le journal des créneaux incomplets.
///
/// Les compteurs de charge et l'historique des paires restent locaux à chaque
/// builder ; seule la source aléatoire traverse les appels.
#[derive(Debug)]
pub struct Scheduler<R = StdRng> {
    rng: R,
    underfills: Vec<Underfill>,
}

impl Scheduler<StdRng> {
    /// Run reproductible : même entrée + même graine ⇒ mêmes tableaux.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            underfills: Vec::new(),
        }
    }

    pub fn underfills(&self) -> &[Underfill] {
        &self.underfills
    }

    pub fn take_underfills(&mut self) -> Vec<Underfill> {
        std::mem::take(&mut self.underfills)
    }

    pub fn build_eating_schedule(
        &mut self,
        meals: &[String],
        patrols: &[String],
        eligible: &[&Person],
        eating_exclusions: &BTreeSet<String>,
    ) -> Result<Table, SchedError> {
        eating::build_eating_schedule(self, meals, patrols, eligible, eating_exclusions)
    }

    pub fn build_staff_duty_roster(
        &mut self,
        meals: &[String],
        duty_roles: &[String],
        duty_eligible: &[&Person],
    ) -> Result<Table, SchedError> {
        duty::build_staff_duty_roster(self, meals, duty_roles, duty_eligible)
    }

    pub fn build_patrol_duty_rosters(
        &mut self,
        patrols: &[String],
        membership: &BTreeMap<String, Vec<String>>,
        meals: &[String],
        scout_roles: &[String],
        staff_roles: &[String],
    ) -> Result<BTreeMap<String, Table>, SchedError> {
        patrol::build_patrol_duty_rosters(self, patrols, membership, meals, scout_roles, staff_roles)
    }

    pub fn build_latrine_duty(
        &mut self,
        days: &[String],
        patrols: &[String],
        duty_eligible: &[&Person],
    ) -> Result<Table, SchedError> {
        latrine::build_latrine_duty(self, days, patrols, duty_eligible)
    }

    /// Run complet : les quatre builders s'enchaînent, une erreur bloquante
    /// n'arrête que le tableau concerné.
    pub fn build_workbook(&mut self, roster: &Roster, config: &CampConfig) -> Workbook {
        let eligible = roster.all_eligible(&config.excluded);
        let duty_eligible = roster.duty_eligible(&config.excluded, &config.eating_only);
        tracing::info!(
            staff = roster.staff.len(),
            eligible = eligible.len(),
            duty_eligible = duty_eligible.len(),
            "building workbook"
        );

        let mut workbook = Workbook::default();

        match self.build_eating_schedule(
            &config.meals,
            &config.patrols,
            &eligible,
            &config.eating_excluded,
        ) {
            Ok(table) => workbook.eating = Some(table),
            Err(err) => workbook.errors.push(TableError::new(EATING_TITLE, &err)),
        }

        match self.build_staff_duty_roster(&config.meals, &config.duty_roles, &duty_eligible) {
            Ok(table) => workbook.staff_duty = Some(table),
            Err(err) => workbook.errors.push(TableError::new(STAFF_DUTY_TITLE, &err)),
        }

        match self.build_patrol_duty_rosters(
            &config.patrols,
            &roster.patrol_members,
            &config.meals,
            &config.scout_roles,
            &config.staff_roles,
        ) {
            Ok(tables) => workbook.patrol_duty = tables,
            Err(err) => workbook.errors.push(TableError::new("Patrol Duty Rosters", &err)),
        }

        match self.build_latrine_duty(&config.latrine_days, &config.patrols, &duty_eligible) {
            Ok(table) => workbook.latrine = Some(table),
            Err(err) => workbook.errors.push(TableError::new(LATRINE_TITLE, &err)),
        }

        for error in &workbook.errors {
            tracing::error!(table = %error.table, error = %error.message, "table not built");
        }
        workbook.underfills = self.take_underfills();
        workbook
    }
}
