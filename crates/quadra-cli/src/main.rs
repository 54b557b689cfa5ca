use anyhow::{bail, Context};
use clap::{Arg, ArgAction, Command};
use quadra_loader::ProjectCollection;
use quadra_model::{EnrichedProject, Quadrant, Status};
use quadra_query::{
    run_view, FacetFilter, SortDirection, SortKey, SortSpec, StatusFilter, TextQuery, ViewState,
};
use quadra_report::PortfolioSummary;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir_arg = Arg::new("dir")
        .required(true)
        .help("Content directory holding one .md record per project");

    let cli = Command::new("quadra")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Portfolio prioritization over a markdown content store")
        .subcommand_required(true)
        .subcommand(
            Command::new("verify")
                .about("Load the store and check every quadrant assignment")
                .arg(dir_arg.clone()),
        )
        .subcommand(
            Command::new("summary")
                .about("Print the portfolio rollup")
                .arg(dir_arg.clone())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Run one query pass and print the matching rows")
                .arg(dir_arg)
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Text query term"),
                )
                .arg(
                    Arg::new("fuzzy")
                        .long("fuzzy")
                        .action(ArgAction::SetTrue)
                        .help("Use the weighted fuzzy strategy instead of substring"),
                )
                .arg(Arg::new("status").long("status").help("Status filter"))
                .arg(
                    Arg::new("department")
                        .long("department")
                        .help("Department filter"),
                )
                .arg(Arg::new("phase").long("phase").help("Phase filter"))
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Sort key: id, title, impact, effort, roi"),
                )
                .arg(
                    Arg::new("desc")
                        .long("desc")
                        .action(ArgAction::SetTrue)
                        .help("Sort descending"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("verify", args)) => {
            let dir = args.get_one::<String>("dir").expect("required arg");
            verify(Path::new(dir))
        }
        Some(("summary", args)) => {
            let dir = args.get_one::<String>("dir").expect("required arg");
            summary(Path::new(dir), args.get_flag("json"))
        }
        Some(("list", args)) => {
            let dir = args.get_one::<String>("dir").expect("required arg");
            let state = view_state_from_args(args)?;
            list(Path::new(dir), state)
        }
        _ => unreachable!("subcommand required"),
    }
}

fn load(dir: &Path) -> anyhow::Result<ProjectCollection> {
    let (collection, report) = ProjectCollection::load_dir(dir)
        .with_context(|| format!("loading content store {}", dir.display()))?;
    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "some records were dropped");
    }
    Ok(collection)
}

fn verify(dir: &Path) -> anyhow::Result<()> {
    let collection = load(dir)?;
    println!("Found {} projects.", collection.len());

    if collection.is_empty() {
        bail!("no projects found in {}", dir.display());
    }

    let mut failures = 0usize;
    for project in collection.projects() {
        let record = &project.record;
        println!("\nProject: {} ({})", record.title, record.id);
        println!(
            "  Raw Scores - Value: {}, Complexity: {}",
            record.scores.strategic_value, record.scores.complexity
        );
        println!(
            "  Normalized - Impact: {}, Effort: {}",
            project.normalized_scores.impact, project.normalized_scores.effort
        );
        println!("  Quadrant: {}", project.quadrant);

        let expected = Quadrant::classify(
            record.scores.strategic_value * 10.0,
            record.scores.complexity * 10.0,
        );
        if project.quadrant == expected {
            println!("  PASS: Quadrant assignment correct.");
        } else {
            println!("  FAIL: Expected {expected}, got {}", project.quadrant);
            failures += 1;
        }
    }

    let summary = PortfolioSummary::compute(collection.projects());
    println!("\nQuadrant Distribution:");
    for quadrant in Quadrant::ALL {
        println!("  {quadrant}: {}", summary.quadrants.get(quadrant));
    }

    if failures > 0 {
        bail!("{failures} quadrant assignments failed verification");
    }
    println!("\nVerification Complete.");
    Ok(())
}

fn summary(dir: &Path, json: bool) -> anyhow::Result<()> {
    let collection = load(dir)?;
    let summary = PortfolioSummary::compute(collection.projects());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Portfolio Summary");
    println!("=================");
    println!("Total Initiatives: {}", summary.total_count);
    println!("Active Projects:   {}", summary.active_count);
    println!("Total Investment:  ${:.0}", summary.total_investment);
    println!("Projected ROI:     ${:.0}", summary.total_projected_roi);
    println!("ROI Multiplier:    {:.2}x", summary.roi_multiplier);
    println!();
    for quadrant in Quadrant::ALL {
        println!("{quadrant}: {}", summary.quadrants.get(quadrant));
    }
    Ok(())
}

fn list(dir: &Path, mut state: ViewState) -> anyhow::Result<()> {
    let collection = load(dir)?;

    // The CLI has no scroll, so reveal everything up front
    while state.reveal.revealed() < collection.len() {
        state.reveal.begin_load_more();
        state.reveal.complete_load();
    }

    let output = run_view(collection.projects(), &state);
    println!(
        "{:<10} {:<32} {:>6} {:>6} {:>8}  {}",
        "ID", "TITLE", "IMPACT", "EFFORT", "ROI", "QUADRANT"
    );
    for row in &output.rows {
        println!(
            "{:<10} {:<32} {:>6} {:>6} {:>8}  {}",
            row.record.id,
            row.record.title,
            row.normalized_scores.impact,
            row.normalized_scores.effort,
            roi_display(row),
            row.quadrant
        );
    }
    println!("\n{} of {} projects", output.rows.len(), collection.len());
    Ok(())
}

/// The one ROI rendering used everywhere: multiplier or "-"
fn roi_display(project: &EnrichedProject) -> String {
    match project.roi_ratio() {
        Some(ratio) => format!("{ratio:.2}x"),
        None => "-".to_string(),
    }
}

fn view_state_from_args(args: &clap::ArgMatches) -> anyhow::Result<ViewState> {
    let mut state = ViewState::new();

    if let Some(term) = args.get_one::<String>("search") {
        let query = if args.get_flag("fuzzy") {
            TextQuery::fuzzy(term.clone())
        } else {
            TextQuery::substring(term.clone())
        };
        state.set_query(Some(query));
    }

    if let Some(status) = args.get_one::<String>("status") {
        state.set_status(StatusFilter::Only(parse_status(status)?));
    }
    if let Some(department) = args.get_one::<String>("department") {
        state.set_department(FacetFilter::Only(department.clone()));
    }
    if let Some(phase) = args.get_one::<String>("phase") {
        state.set_phase(FacetFilter::Only(phase.clone()));
    }

    if let Some(key) = args.get_one::<String>("sort") {
        let key = parse_sort_key(key)?;
        let direction = if args.get_flag("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        state.sort = Some(SortSpec { key, direction });
    }

    Ok(state)
}

fn parse_status(label: &str) -> anyhow::Result<Status> {
    Status::ALL
        .into_iter()
        .find(|s| s.label().eq_ignore_ascii_case(label))
        .with_context(|| format!("unknown status '{label}'"))
}

fn parse_sort_key(key: &str) -> anyhow::Result<SortKey> {
    match key.to_ascii_lowercase().as_str() {
        "id" => Ok(SortKey::Id),
        "title" => Ok(SortKey::Title),
        "impact" => Ok(SortKey::Impact),
        "effort" => Ok(SortKey::Effort),
        "roi" => Ok(SortKey::Roi),
        other => bail!("unknown sort key '{other}'"),
    }
}
