use super::allocator::{pick_least_loaded_for_duty, LoadCounter};
use super::types::{SchedError, UnderfillReason};
use super::{util, Scheduler, STAFF_DUTY_TITLE};
use crate::model::{Person, Table};
use crate::shuffle::shuffle;
use rand::Rng;

pub(super) fn build_staff_duty_roster<R: Rng>(
    scheduler: &mut Scheduler<R>,
    meals: &[String],
    roles: &[String],
    duty_eligible: &[&Person],
) -> Result<Table, SchedError> {
    util::require_list(meals, "meals")?;
    util::require_list(roles, "duty roles")?;

    // mélange unique avant la boucle : départage stable sur le run
    let mut pool: Vec<&Person> = duty_eligible.to_vec();
    shuffle(&mut pool, &mut scheduler.rng);

    let mut loads = LoadCounter::new(&pool);
    let mut table = Table::new(STAFF_DUTY_TITLE, "Meal", roles.iter().cloned());

    for meal in meals {
        let mut cells = Vec::with_capacity(roles.len());
        for role in roles {
            match pick_least_loaded_for_duty(&pool, &loads) {
                Some(person) => {
                    loads.bump(&person.name);
                    cells.push(person.name.clone());
                }
                None => {
                    scheduler.underfills.push(util::underfill(
                        STAFF_DUTY_TITLE,
                        meal,
                        role,
                        0,
                        1,
                        UnderfillReason::EmptyPool,
                    ));
                    cells.push(String::new());
                }
            }
        }
        table.push_row(meal.clone(), cells);
    }

    tracing::debug!(
        assignments = loads.total(),
        spread = loads.spread(),
        "staff duty roster built"
    );
    Ok(table)
}
