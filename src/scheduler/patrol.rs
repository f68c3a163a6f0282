use super::types::{SchedError, UnderfillReason};
use super::{util, Scheduler, SCOUT_ROLES_MIN_MEMBERS};
use crate::model::Table;
use rand::Rng;
use std::collections::BTreeMap;

/// Rotation round-robin sans compteur : la ligne `r` donne le rôle `i` à
/// `members[(r + i) % M]`. Prévisible pour les scouts, aucun tirage.
pub(super) fn build_patrol_duty_rosters<R: Rng>(
    scheduler: &mut Scheduler<R>,
    patrols: &[String],
    membership: &BTreeMap<String, Vec<String>>,
    meals: &[String],
    scout_roles: &[String],
    staff_roles: &[String],
) -> Result<BTreeMap<String, Table>, SchedError> {
    util::require_list(patrols, "patrol names")?;
    util::require_list(meals, "meals")?;

    let mut out = BTreeMap::new();

    for patrol in patrols {
        if util::is_support_patrol(patrol) {
            tracing::debug!(patrol = %patrol, "support patrol skipped");
            continue;
        }

        let members = membership.get(patrol).map(Vec::as_slice).unwrap_or(&[]);
        let roles = if members.len() >= SCOUT_ROLES_MIN_MEMBERS {
            util::require_list(scout_roles, "scout roles")?;
            scout_roles
        } else {
            util::require_list(staff_roles, "staff roles")?;
            staff_roles
        };

        let title = format!("{patrol} Duty Roster");
        let mut table = Table::new(title.as_str(), "Meal", roles.iter().cloned());

        if members.is_empty() {
            scheduler.underfills.push(util::underfill(
                &title,
                "*",
                "*",
                0,
                1,
                UnderfillReason::EmptyPool,
            ));
        }

        for (r, meal) in meals.iter().enumerate() {
            let cells = rotation_row(members, roles.len(), r);
            table.push_row(meal.clone(), cells);
        }

        out.insert(patrol.clone(), table);
    }

    Ok(out)
}

fn rotation_row(members: &[String], roles: usize, row: usize) -> Vec<String> {
    if members.is_empty() {
        return vec![String::new(); roles];
    }
    (0..roles)
        .map(|i| members[(row + i) % members.len()].clone())
        .collect()
}
