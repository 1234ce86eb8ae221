use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use liftplan_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Training program generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a training program for a client profile
    Generate {
        /// Client profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Training goal (strength, hypertrophy, fat_loss, event)
        #[arg(long, default_value = "strength")]
        goal: String,

        /// Program length in weeks
        #[arg(long, default_value_t = 12)]
        weeks: u32,

        /// Sessions per week
        #[arg(long, default_value_t = 3)]
        days: u8,

        /// Split name (defaults to the goal's split)
        #[arg(long)]
        split: Option<String>,

        /// Periodization style (linear, block, wave, reverse)
        #[arg(long)]
        style: Option<String>,

        /// Progression model for 1RM-based lifts
        /// (linear, percentage, wave, double_progression, step_loading)
        #[arg(long)]
        model: Option<String>,

        /// Extra catalog source JSON files to merge
        #[arg(long)]
        exercises: Vec<PathBuf>,

        /// Label weeks with dates starting from this Monday (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Write the week-by-week progression table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the full program as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Inspect the exercise catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List all exercises
    List,
    /// Check the catalog for consistency errors
    Validate,
}

fn main() -> Result<()> {
    liftplan_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::load()?,
    };

    match cli.command {
        Commands::Generate {
            profile,
            goal,
            weeks,
            days,
            split,
            style,
            model,
            exercises,
            start_date,
            csv,
            json,
        } => cmd_generate(
            &config, profile, goal, weeks, days, split, style, model, exercises, start_date, csv,
            json,
        ),
        Commands::Catalog { command } => match command {
            CatalogCommands::List => cmd_catalog_list(),
            CatalogCommands::Validate => cmd_catalog_validate(),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    config: &EngineConfig,
    profile_path: PathBuf,
    goal: String,
    weeks: u32,
    days: u8,
    split: Option<String>,
    style: Option<String>,
    model: Option<String>,
    extra_sources: Vec<PathBuf>,
    start_date: Option<NaiveDate>,
    csv_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
) -> Result<()> {
    let contents = std::fs::read_to_string(&profile_path)?;
    let profile: ClientProfile = serde_json::from_str(&contents)?;

    let mut catalog = Catalog::builtin();
    for source in &extra_sources {
        catalog.merge_json_file(source);
    }

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("invalid catalog".into()));
    }

    let mut request = ProgramRequest::new(parse_goal(&goal)?, weeks, days);
    request.split = split;
    request.periodization = style.as_deref().map(parse_style).transpose()?;
    request.model = model.as_deref().map(parse_model).transpose()?;

    let assembler = Assembler::new(&catalog, &profile, config);
    let program = assembler.generate(&request)?;
    tracing::info!(
        "Generated program {} with {} workouts",
        program.id,
        program.statistics.total_workouts
    );

    print_program(&program, start_date);

    if let Some(path) = csv_path {
        write_progression_csv(&program, &path)?;
        println!("\nProgression table written to {}", path.display());
    }

    if let Some(path) = json_path {
        std::fs::write(&path, serde_json::to_string_pretty(&program)?)?;
        println!("Program JSON written to {}", path.display());
    }

    Ok(())
}

fn cmd_catalog_list() -> Result<()> {
    let catalog = default_catalog();
    println!("{} exercises\n", catalog.len());
    for ex in catalog.exercises() {
        let equipment: Vec<String> = ex.equipment.iter().map(|e| format!("{e:?}")).collect();
        println!(
            "  {:<24} {:<10} {:?} [{}]",
            ex.id,
            format!("{:?}", ex.movement).to_lowercase(),
            ex.difficulty,
            equipment.join(", ")
        );
    }
    Ok(())
}

fn cmd_catalog_validate() -> Result<()> {
    let catalog = default_catalog();
    let errors = catalog.validate();
    if errors.is_empty() {
        println!("Catalog OK: {} exercises", catalog.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        Err(Error::CatalogValidation(format!(
            "{} validation errors",
            errors.len()
        )))
    }
}

fn parse_goal(s: &str) -> Result<Goal> {
    match s.to_lowercase().as_str() {
        "strength" => Ok(Goal::Strength),
        "hypertrophy" | "muscle" => Ok(Goal::Hypertrophy),
        "fat_loss" | "fatloss" => Ok(Goal::FatLoss),
        "event" | "race" => Ok(Goal::Event),
        other => Err(Error::InvalidConfiguration(format!(
            "unknown goal '{other}'"
        ))),
    }
}

fn parse_style(s: &str) -> Result<PeriodizationStyle> {
    match s.to_lowercase().as_str() {
        "linear" => Ok(PeriodizationStyle::Linear),
        "block" => Ok(PeriodizationStyle::Block),
        "wave" => Ok(PeriodizationStyle::Wave),
        "reverse" => Ok(PeriodizationStyle::Reverse),
        other => Err(Error::InvalidConfiguration(format!(
            "unknown periodization style '{other}'"
        ))),
    }
}

fn parse_model(s: &str) -> Result<ProgressionModel> {
    match s.to_lowercase().as_str() {
        "linear" => Ok(ProgressionModel::Linear),
        "percentage" => Ok(ProgressionModel::Percentage),
        "wave" => Ok(ProgressionModel::Wave),
        "double_progression" | "double" => Ok(ProgressionModel::DoubleProgression),
        "step_loading" | "step" => Ok(ProgressionModel::StepLoading),
        other => Err(Error::InvalidConfiguration(format!(
            "unknown progression model '{other}'"
        ))),
    }
}

fn print_program(program: &GeneratedProgram, start_date: Option<NaiveDate>) {
    println!(
        "{} | {:?} | {:?} periodization | {} weeks x {} days",
        program.client_name,
        program.goal,
        program.periodization,
        program.total_weeks,
        program.days_per_week
    );

    println!("\nPhases:");
    for phase in &program.phases {
        println!(
            "  {:<16} weeks {:>2}-{:<2}  {:>3.0}-{:.0}% 1RM  volume {:<6}  {}",
            phase.name,
            phase.week_start,
            phase.week_end,
            phase.intensity_min,
            phase.intensity_max,
            format!("{:?}", phase.volume).to_lowercase(),
            phase.focus
        );
    }

    for week in &program.weeks {
        let p = &week.parameters;
        let deload = if p.is_deload { "  [deload]" } else { "" };
        let date_label = start_date
            .map(|d| {
                let monday = d + Duration::weeks(i64::from(week.week) - 1);
                format!(" ({monday})")
            })
            .unwrap_or_default();

        println!(
            "\nWeek {}{} | {} | {:.0}% intensity, {:.0}% volume, RPE {:.1}{}",
            week.week, date_label, p.phase_name, p.intensity_percent, p.volume_percent, p.rpe, deload
        );

        for day in &week.days {
            println!("  {} ({:?})", day.name, day.load);
            for ex in &day.exercises {
                let mut line = format!(
                    "    {}. {:<28} {}x{}",
                    ex.order, ex.exercise_name, ex.prescription.sets, ex.prescription.reps
                );
                if let Some(weight) = ex.prescription.weight_kg {
                    line.push_str(&format!(" @ {weight} kg"));
                }
                if let Some(intensity) = ex.prescription.intensity_percent {
                    line.push_str(&format!(" ({intensity:.0}%)"));
                }
                if let Some(level) = ex.prescription.level {
                    line.push_str(&format!(" level {level}"));
                }
                if let Some(block) = ex.prescription.intervals {
                    line.push_str(&format!(
                        " {}x{}s/{}s",
                        block.rounds, block.work_seconds, block.rest_seconds
                    ));
                }
                line.push_str(&format!(
                    " rest {}s RPE {:.1}",
                    ex.prescription.rest_seconds, ex.prescription.rpe
                ));
                if let Some(sub) = &ex.substitute {
                    line.push_str(&format!(" (alt: {sub})"));
                }
                println!("{line}");
            }
        }
    }

    let stats = &program.statistics;
    println!(
        "\nTotals: {} workouts, {} sets, {:.0} kg tonnage, ~{} min/session",
        stats.total_workouts, stats.total_sets, stats.total_tonnage_kg, stats.avg_session_minutes
    );
    println!(
        "Balance: score {}/100 ({:?}), push:pull {}, quad:hip {}",
        stats.balance.score,
        stats.balance.assessment,
        ratio_label(stats.balance.push_pull_ratio),
        ratio_label(stats.balance.quad_hip_ratio),
    );
}

fn ratio_label(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}"))
}

fn write_progression_csv(program: &GeneratedProgram, path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_io)?;

    writer
        .write_record([
            "week", "phase", "deload", "day", "day_type", "exercise", "sets", "reps", "weight_kg",
            "intensity_pct", "rpe", "rest_s",
        ])
        .map_err(csv_io)?;

    for week in &program.weeks {
        for day in &week.days {
            for ex in &day.exercises {
                writer
                    .write_record([
                        week.week.to_string(),
                        week.parameters.phase_name.clone(),
                        week.parameters.is_deload.to_string(),
                        day.day.to_string(),
                        day.day_type.clone(),
                        ex.exercise_name.clone(),
                        ex.prescription.sets.to_string(),
                        ex.prescription.reps.to_string(),
                        ex.prescription
                            .weight_kg
                            .map(|w| w.to_string())
                            .unwrap_or_default(),
                        ex.prescription
                            .intensity_percent
                            .map(|i| format!("{i:.1}"))
                            .unwrap_or_default(),
                        format!("{:.1}", ex.prescription.rpe),
                        ex.prescription.rest_seconds.to_string(),
                    ])
                    .map_err(csv_io)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn csv_io(e: csv::Error) -> Error {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        other => Error::InvalidConfiguration(format!("CSV error: {other:?}")),
    }
}
