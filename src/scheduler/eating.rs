use super::allocator::{pick_least_loaded_for_pair, LoadCounter, PairHistory};
use super::types::{SchedError, UnderfillReason, EATING_PAIR_SIZE};
use super::{util, Scheduler, EATING_TITLE};
use crate::model::{Person, Table};
use crate::shuffle::shuffle;
use rand::Rng;
use std::collections::BTreeSet;

pub(super) fn build_eating_schedule<R: Rng>(
    scheduler: &mut Scheduler<R>,
    meals: &[String],
    patrols: &[String],
    eligible: &[&Person],
    exclusions: &BTreeSet<String>,
) -> Result<Table, SchedError> {
    util::require_list(meals, "meals")?;
    util::require_list(patrols, "patrol names")?;

    let mut pool: Vec<&Person> = eligible.to_vec();
    shuffle(&mut pool, &mut scheduler.rng);
    let seatable = seatable_pool(&pool, exclusions);

    let mut loads = LoadCounter::new(&seatable);
    let mut history = PairHistory::new();
    let mut table = Table::new(EATING_TITLE, "Meal", patrols.iter().cloned());

    for meal in meals {
        let mut cells = Vec::with_capacity(patrols.len());
        for patrol in patrols {
            let mut seated: Vec<&Person> = Vec::with_capacity(EATING_PAIR_SIZE);

            while seated.len() < EATING_PAIR_SIZE {
                let in_slot: Vec<&str> = seated.iter().map(|&p| p.name.as_str()).collect();
                let first = in_slot.first().copied();
                match pick_least_loaded_for_pair(
                    &pool, exclusions, &loads, &in_slot, first, &history,
                ) {
                    Some(person) => {
                        loads.bump(&person.name);
                        seated.push(person);
                    }
                    None => {
                        let reason = if seatable.is_empty() {
                            UnderfillReason::EmptyPool
                        } else if seatable.len() <= seated.len() {
                            UnderfillReason::PoolExhausted
                        } else {
                            UnderfillReason::RepeatPair
                        };
                        scheduler.underfills.push(util::underfill(
                            EATING_TITLE,
                            meal,
                            patrol,
                            seated.len(),
                            EATING_PAIR_SIZE,
                            reason,
                        ));
                        break;
                    }
                }
            }

            if let [a, b] = seated.as_slice() {
                history.record(&a.name, &b.name);
            }

            let names: Vec<String> = seated.iter().map(|p| util::display_name(p, patrol)).collect();
            cells.push(names.join(", "));
        }
        table.push_row(meal.clone(), cells);
    }

    tracing::debug!(
        pairs = history.len(),
        spread = loads.spread(),
        "eating schedule built"
    );
    Ok(table)
}

/// Membres du pool qui peuvent réellement s'attabler (hors exclusions repas).
fn seatable_pool<'a>(pool: &[&'a Person], exclusions: &BTreeSet<String>) -> Vec<&'a Person> {
    pool.iter()
        .copied()
        .filter(|p| !exclusions.contains(&p.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_counter_ignores_people_excluded_from_eating() {
        let people: Vec<Person> = ["A", "B", "C"].iter().map(|n| Person::new(*n)).collect();
        let pool: Vec<&Person> = people.iter().collect();
        let exclusions: BTreeSet<String> = ["C".to_string()].into();

        let seatable = seatable_pool(&pool, &exclusions);
        let mut loads = LoadCounter::new(&seatable);
        assert_eq!(loads.len(), 2);

        loads.bump("A");
        loads.bump("B");
        assert_eq!(loads.spread(), 0);
    }
}
