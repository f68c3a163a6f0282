use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Nombre de convives par créneau repas
pub const EATING_PAIR_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnderfillReason {
    EmptyPool,     // aucun éligible au départ
    PoolExhausted, // plus personne de disponible pour ce créneau
    RepeatPair,    // tous les candidats au minimum formeraient une paire déjà vue
}

impl fmt::Display for UnderfillReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnderfillReason::EmptyPool => "empty pool",
            UnderfillReason::PoolExhausted => "pool exhausted",
            UnderfillReason::RepeatPair => "repeat pair blocked",
        };
        f.write_str(s)
    }
}

/// Créneau resté incomplet (erreur « douce », le run continue)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Underfill {
    pub table: String,
    pub row: String,
    pub column: String,
    pub filled: usize,
    pub required: usize,
    pub reason: UnderfillReason,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("missing reference data: {0}")]
    MissingReferenceData(&'static str),
    #[error("blank entry in reference list: {0}")]
    BlankReferenceEntry(&'static str),
}
