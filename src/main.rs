use clap::Parser;
use gradetrack::application::{
    init::init, ConfigService, CourseChanges, CourseDraft, CourseRow, CourseService,
    DashboardService,
};
use gradetrack::cli::{
    format_average, format_burndown, format_comparison, format_config, format_course_table,
    format_dashboard, Cli, Commands, StdinPrompt,
};
use gradetrack::domain::{average_grade, SaveOutcome, StudyConfig};
use gradetrack::error::GradeTrackError;
use gradetrack::infrastructure::FileSystemRepository;
use gradetrack::logging::init_cli_logger;

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the workspace and load goals, prompting when they are missing
fn open_workspace() -> Result<(FileSystemRepository, StudyConfig), GradeTrackError> {
    let repo = FileSystemRepository::discover()?;
    let service = ConfigService::new(repo);
    let config = service.load_or_prompt(&StdinPrompt)?;
    Ok((service.into_repository(), config.study()))
}

fn report_outcome(outcome: &SaveOutcome, done: &str) {
    match outcome {
        SaveOutcome::Saved => println!("{}", done),
        SaveOutcome::DuplicatesRejected { names } => {
            eprintln!(
                "Warning: course already exists: {}. Nothing was saved.",
                names.join(", ")
            );
        }
    }
}

fn run(cli: Cli) -> Result<(), GradeTrackError> {
    match cli.command {
        Some(Commands::Init {
            path,
            target_time,
            target_grade,
        }) => {
            let config = init(&path, StudyConfig::new(target_time, target_grade))?;
            println!("Initialized gradetrack workspace at {}", path.display());
            println!(
                "Target: {} years ({} semesters), grade {}",
                config.target_time,
                config.study().total_semesters(),
                config.target_grade
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: gradetrack config [--list | <key> [<value>]]");
                println!("Valid keys: target_time, target_grade, created");
                Ok(())
            }
        }
        Some(Commands::Add {
            name,
            credits,
            target_grade,
            semester,
        }) => {
            let (repo, study) = open_workspace()?;
            let mut service = CourseService::load(repo)?;
            let draft = CourseDraft {
                name,
                credits,
                target_grade,
                semester,
            };
            let done = format!("Added course '{}'", draft.name.trim());
            let outcome = service.add(&study, draft)?;
            report_outcome(&outcome, &done);
            Ok(())
        }
        Some(Commands::Edit {
            name,
            rename,
            credits,
            grade,
            target_grade,
            semester,
        }) => {
            let (repo, study) = open_workspace()?;
            let mut service = CourseService::load(repo)?;
            let changes = CourseChanges {
                rename,
                credits,
                grade,
                target_grade,
                semester,
            };
            let outcome = service.edit(&study, &name, changes)?;
            report_outcome(&outcome, &format!("Updated course '{}'", name));
            Ok(())
        }
        Some(Commands::List) => {
            let (repo, _study) = open_workspace()?;
            let mut service = CourseService::load(repo)?;
            let courses = service.list();
            let rows: Vec<CourseRow> = courses.iter().map(CourseRow::from).collect();
            println!("{}", format_course_table(&rows).trim_end());
            if !rows.is_empty() {
                print!("\n{}", format_average(average_grade(courses)));
            }
            Ok(())
        }
        Some(Commands::Progress) => {
            let (repo, study) = open_workspace()?;
            let dashboard = DashboardService::new(repo).snapshot(&study)?;
            print!("{}", format_average(dashboard.average_grade));
            print!("{}", format_comparison(&dashboard.comparison));
            Ok(())
        }
        Some(Commands::Burndown { json }) => {
            let (repo, study) = open_workspace()?;
            let dashboard = DashboardService::new(repo).snapshot(&study)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.burndown)?);
            } else {
                println!("{}", format_burndown(&dashboard.burndown).trim_end());
            }
            Ok(())
        }
        Some(Commands::Status) => {
            let (repo, study) = open_workspace()?;
            let dashboard = DashboardService::new(repo).snapshot(&study)?;
            print!("{}", format_dashboard(&dashboard));
            Ok(())
        }
        None => {
            println!("gradetrack - Degree progress tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
