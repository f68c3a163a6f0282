#![forbid(unsafe_code)]
//! Outpost roster — répartition des corvées d'un camp scout (sans tableur).
//!
//! - Repas : binômes de staff par patrouille, charge équilibrée, sans paire répétée.
//! - Cuisine : rôles de staff par repas, toujours au moins chargé.
//! - Patrouilles : rotation round-robin prévisible des scouts sur les rôles.
//! - Latrines : rotation modulaire patrouille + staff.
//! - Le cœur est pur ; fichiers CSV/JSON et CLI restent en périphérie.

pub mod config;
pub mod directory;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod shuffle;
pub mod storage;
pub mod workbook;

pub use config::{load_config_from_file, CampConfig};
pub use directory::name_directory;
pub use model::{Person, Roster, Row, Table};
pub use scheduler::{
    pick_least_loaded_for_duty, pick_least_loaded_for_pair, LoadCounter, PairHistory, SchedError,
    Scheduler, Underfill, UnderfillReason,
};
pub use shuffle::shuffle;
pub use storage::{JsonStorage, Storage};
pub use workbook::{TableError, Workbook};
