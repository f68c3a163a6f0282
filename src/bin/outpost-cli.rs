#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outpost_roster::{
    config::{load_config_from_file, CampConfig},
    directory::name_directory,
    io,
    model::{Person, Roster, Table},
    scheduler::Scheduler,
    storage::{JsonStorage, Storage},
};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de répartition des corvées de camp (repas, cuisine, patrouilles, latrines)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Configuration JSON du camp (repas, rôles, exclusions)
    #[arg(long, global = true, default_value = "camp.json")]
    config: PathBuf,

    /// CSV du staff (`name,children`)
    #[arg(long, global = true, default_value = "staff.csv")]
    staff: PathBuf,

    /// CSV des patrouilles (une colonne par patrouille)
    #[arg(long, global = true)]
    patrols: Option<PathBuf>,

    /// Graine du mélange (run reproductible)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planning des repas du staff
    Eating {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Rôles de cuisine du staff
    Duty {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Rotation des rôles dans chaque patrouille (un CSV par patrouille)
    Patrols {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Corvée latrines
    Latrine {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Run complet : tous les tableaux
    All {
        /// Workbook JSON (écriture atomique)
        #[arg(long, default_value = "workbook.json")]
        out: PathBuf,
        /// Export CSV d'un fichier par tableau (optionnel)
        #[arg(long)]
        csv_dir: Option<PathBuf>,
    },

    /// Liste des noms valides, triée par nom de famille
    Names,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let roster = io::load_roster(&cli.staff, cli.patrols.as_ref())?;
    let mut scheduler = match cli.seed {
        Some(seed) => Scheduler::seeded(seed),
        None => Scheduler::from_os_rng(),
    };

    let code = match cli.cmd {
        Commands::Names => {
            for name in name_directory(&roster) {
                println!("{name}");
            }
            0
        }
        Commands::Eating { out } => {
            let config = load_config_from_file(&cli.config)?;
            let eligible = roster.all_eligible(&config.excluded);
            let table = scheduler.build_eating_schedule(
                &config.meals,
                &config.patrols,
                &eligible,
                &config.eating_excluded,
            )?;
            emit_table(&table, out.as_deref())?;
            report_underfills(&mut scheduler)
        }
        Commands::Duty { out } => {
            let config = load_config_from_file(&cli.config)?;
            let pool = duty_pool(&roster, &config);
            let table = scheduler.build_staff_duty_roster(&config.meals, &config.duty_roles, &pool)?;
            emit_table(&table, out.as_deref())?;
            report_underfills(&mut scheduler)
        }
        Commands::Latrine { out } => {
            let config = load_config_from_file(&cli.config)?;
            let pool = duty_pool(&roster, &config);
            let table = scheduler.build_latrine_duty(&config.latrine_days, &config.patrols, &pool)?;
            emit_table(&table, out.as_deref())?;
            report_underfills(&mut scheduler)
        }
        Commands::Patrols { out_dir } => {
            let config = load_config_from_file(&cli.config)?;
            let tables = scheduler.build_patrol_duty_rosters(
                &config.patrols,
                &roster.patrol_members,
                &config.meals,
                &config.scout_roles,
                &config.staff_roles,
            )?;
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating directory {}", out_dir.display()))?;
            for table in tables.values() {
                let path = out_dir.join(io::table_file_name(table));
                io::export_table_csv(&path, table)?;
                println!("{}", path.display());
            }
            report_underfills(&mut scheduler)
        }
        Commands::All { out, csv_dir } => {
            let config = load_config_from_file(&cli.config)?;
            let workbook = scheduler.build_workbook(&roster, &config);
            JsonStorage::open(&out)?.save(&workbook)?;
            if let Some(dir) = csv_dir {
                for path in io::export_workbook_csv(dir, &workbook)? {
                    println!("{}", path.display());
                }
            }
            for err in &workbook.errors {
                eprintln!("{}: {}", err.table, err.message);
            }
            for u in &workbook.underfills {
                eprintln!(
                    "{} | {} | {}: {}/{} ({})",
                    u.table, u.row, u.column, u.filled, u.required, u.reason
                );
            }
            // Code 2 = WARNING/INCOMPLETE
            if workbook.is_complete() {
                0
            } else {
                2
            }
        }
    };

    std::process::exit(code);
}

fn duty_pool<'a>(roster: &'a Roster, config: &CampConfig) -> Vec<&'a Person> {
    roster.duty_eligible(&config.excluded, &config.eating_only)
}

fn emit_table(table: &Table, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => io::export_table_csv(path, table),
        None => io::write_table_csv(std::io::stdout().lock(), table),
    }
}

fn report_underfills(scheduler: &mut Scheduler) -> i32 {
    let underfills = scheduler.take_underfills();
    if underfills.is_empty() {
        return 0;
    }
    eprintln!("Found {} under-filled slot(s)", underfills.len());
    for u in &underfills {
        eprintln!(
            "{} | {} | {}: {}/{} ({})",
            u.table, u.row, u.column, u.filled, u.required, u.reason
        );
    }
    2
}
