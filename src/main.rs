use anyhow::Context;
use clap::Parser;
use uniquest::catalog::{CatalogStore, ScholarshipCatalog};
use uniquest::config::cli::{Command, CvArgs, MatchArgs, ScholarshipArgs};
use uniquest::core::export::{render_report, render_university};
use uniquest::services::assistant::ScriptedAssistant;
use uniquest::services::cv::extract_profile_hints;
use uniquest::services::scholarships::{days_until_deadline, filter_scholarships};
use uniquest::utils::error::{ErrorSeverity, MatchError};
use uniquest::utils::{logger, validation::Validate};
use uniquest::{CatalogSource, CliConfig, MatchEngine};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let Some(err) = e.downcast_ref::<MatchError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {:#} (Category: {:?}, Severity: {:?})",
            e,
            err.category(),
            err.severity()
        );
        eprintln!("❌ {}", err.user_friendly_message());
        eprintln!("💡 Suggestion: {}", err.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match err.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Match(args) => run_match(args),
        Command::Show { id, catalog } => run_show(id, catalog.as_deref()),
        Command::Scholarships(args) => run_scholarships(args),
        Command::Chat { message } => {
            run_chat(&message.join(" "));
            Ok(())
        }
        Command::Cv(args) => run_cv(args),
    }
}

fn load_catalog(path: Option<&str>) -> anyhow::Result<Option<CatalogStore>> {
    path.map(|p| {
        CatalogStore::from_json_file(p).with_context(|| format!("Failed to load catalog '{}'", p))
    })
    .transpose()
}

fn run_match(args: &MatchArgs) -> anyhow::Result<()> {
    let config = args
        .to_search_config()
        .context("Failed to load search configuration")?;

    config.validate()?;
    tracing::info!("✅ Profile loaded and validated");

    let custom = load_catalog(config.catalog_path())?;
    let catalog = CatalogStore::or_builtin(custom.as_ref());

    let engine = MatchEngine::new(catalog);
    let report = engine.run(&config)?;

    if report.is_empty() {
        tracing::warn!("No universities match this profile; try relaxing tuition or GPA");
    }

    print!("{}", render_report(&report, config.output_format()?)?);
    Ok(())
}

fn run_show(id: &str, catalog_path: Option<&str>) -> anyhow::Result<()> {
    let custom = load_catalog(catalog_path)?;
    let catalog = CatalogStore::or_builtin(custom.as_ref());

    let university = catalog.require_by_id(id)?;
    print!("{}", render_university(university));
    Ok(())
}

fn run_scholarships(args: &ScholarshipArgs) -> anyhow::Result<()> {
    let query = args.to_query()?;
    let catalog = ScholarshipCatalog::builtin();
    let results = filter_scholarships(catalog.records(), &query);
    let today = chrono::Local::now().date_naive();

    println!("Found {} of {} scholarships", results.len(), catalog.len());
    for scholarship in results {
        println!();
        println!("{} ({})", scholarship.name, scholarship.kind.label());
        println!("  Provider:    {}", scholarship.provider);
        println!("  Amount:      ${}", scholarship.amount);
        if args.countdown {
            println!(
                "  Deadline:    {} ({} days)",
                scholarship.deadline,
                days_until_deadline(scholarship.deadline, today)
            );
        } else {
            println!("  Deadline:    {}", scholarship.deadline);
        }
        println!("  Countries:   {}", scholarship.countries.join(", "));
        println!("  Fields:      {}", scholarship.fields.join(", "));
        println!("  Eligibility: {}", scholarship.eligibility.join(", "));
    }
    Ok(())
}

fn run_chat(message: &str) {
    let assistant = ScriptedAssistant::default();
    let reply = assistant
        .reply(message)
        .unwrap_or_else(|| assistant.greeting());

    println!("{}", reply.content);
    println!();
    for suggestion in reply.suggestions {
        println!("  • {}", suggestion);
    }
}

fn run_cv(args: &CvArgs) -> anyhow::Result<()> {
    let upload = args.to_upload();
    let hints = extract_profile_hints(&upload)?;
    println!("{}", serde_json::to_string_pretty(&hints)?);
    Ok(())
}
