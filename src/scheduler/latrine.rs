use super::types::{SchedError, UnderfillReason};
use super::{util, Scheduler, LATRINE_TITLE};
use crate::model::{Person, Table};
use crate::shuffle::shuffle;
use rand::Rng;

/// Rotation modulaire simple (pas d'équilibrage de charge) : le jour `d`
/// reçoit `patrols[d % P]` et `staff[d % S]`, après mélange indépendant.
pub(super) fn build_latrine_duty<R: Rng>(
    scheduler: &mut Scheduler<R>,
    days: &[String],
    patrols: &[String],
    duty_eligible: &[&Person],
) -> Result<Table, SchedError> {
    util::require_list(days, "latrine days")?;
    util::require_list(patrols, "patrol names")?;

    let mut staff: Vec<&Person> = duty_eligible.to_vec();
    shuffle(&mut staff, &mut scheduler.rng);
    let mut patrol_order: Vec<&String> = patrols.iter().collect();
    shuffle(&mut patrol_order, &mut scheduler.rng);

    let mut table = Table::new(LATRINE_TITLE, "Day", ["Patrol", "Staff"]);

    for (d, day) in days.iter().enumerate() {
        let patrol = patrol_order[d % patrol_order.len()].clone();
        let person = if staff.is_empty() {
            scheduler.underfills.push(util::underfill(
                LATRINE_TITLE,
                day,
                "Staff",
                0,
                1,
                UnderfillReason::EmptyPool,
            ));
            String::new()
        } else {
            staff[d % staff.len()].name.clone()
        };
        table.push_row(day.clone(), vec![patrol, person]);
    }

    Ok(table)
}
