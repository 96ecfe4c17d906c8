use clap::{Args, Parser, Subcommand};
use coverage_intake::clock::SystemClock;
use coverage_intake::config::AppConfig;
use coverage_intake::error::AppError;
use coverage_intake::session::{JsonFileStore, SessionState};
use coverage_intake::telemetry;
use coverage_intake::workflows::eligibility::questionnaire::fields;
use coverage_intake::workflows::eligibility::{
    EligibilityEngine, EligibilityQuestionnaire, EligibilityResult,
};
use coverage_intake::workflows::intake::{AdvanceOutcome, StepSequencer, SubmitError};
use coverage_intake::workflows::plans::{ComparisonSelection, Plan, PlanCatalog, ToggleOutcome};
use coverage_intake::workflows::providers::{
    FilterCriteria, Page, Provider, ProviderDirectory, ProviderGender, ProviderSearch,
    ProviderType,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "coverage-intake",
    about = "Screen eligibility, compare plans, and search the provider directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the eligibility questionnaire and save the determination
    Eligibility(EligibilityArgs),
    /// Search the provider directory
    Providers(ProviderArgs),
    /// Show one provider by id
    Provider {
        id: String,
    },
    /// List available plans, optionally side by side
    Plans(PlanArgs),
    /// Print the persisted session summary
    Session,
}

#[derive(Args, Debug)]
struct EligibilityArgs {
    #[arg(long)]
    household_size: u32,
    /// Five digit ZIP code
    #[arg(long)]
    zip: String,
    /// self, family, or family-only
    #[arg(long, default_value = "self")]
    coverage: String,
    /// Comma separated ages, one per household member
    #[arg(long, value_delimiter = ',', required = true)]
    ages: Vec<u32>,
    /// Annual household income in dollars
    #[arg(long)]
    income: f64,
    #[arg(long, default_value = "employed-full-time")]
    employment: String,
    #[arg(long)]
    pregnant: bool,
    #[arg(long)]
    disability: bool,
    #[arg(long)]
    foster_care: bool,
    #[arg(long)]
    student: bool,
}

#[derive(Args, Debug, Default)]
struct ProviderArgs {
    /// Provider type label or slug, e.g. "Urgent Care" or urgent-care
    #[arg(long = "type", value_parser = parse_provider_type)]
    provider_type: Option<ProviderType>,
    #[arg(long)]
    specialty: Option<String>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long, value_parser = parse_provider_gender)]
    gender: Option<ProviderGender>,
    #[arg(long)]
    state: Option<String>,
    /// Only providers accepting new patients
    #[arg(long)]
    accepting: bool,
    /// Match against provider name or organization
    #[arg(long)]
    search: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Comma separated plan ids to compare (at most three)
    #[arg(long, value_delimiter = ',')]
    compare: Vec<String>,
    /// Remember a plan as the one to enroll in
    #[arg(long)]
    select: Option<String>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "coverage intake starting");

    match cli.command {
        Command::Eligibility(args) => run_eligibility(&config, args),
        Command::Providers(args) => run_providers(&config, args),
        Command::Provider { id } => run_provider_detail(&config, &id),
        Command::Plans(args) => run_plans(&config, args),
        Command::Session => run_session(&config),
    }
}

fn parse_provider_type(raw: &str) -> Result<ProviderType, String> {
    ProviderType::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = ProviderType::ALL.iter().map(|kind| kind.label()).collect();
        format!("unknown provider type '{raw}' (expected one of: {})", known.join(", "))
    })
}

fn parse_provider_gender(raw: &str) -> Result<ProviderGender, String> {
    ProviderGender::parse(raw).ok_or_else(|| {
        format!("unknown gender '{raw}' (expected one of: Female, Male, N/A, not-applicable)")
    })
}

fn load_directory(config: &AppConfig) -> Result<ProviderDirectory, AppError> {
    match &config.providers.directory_csv {
        Some(path) => Ok(ProviderDirectory::from_path(path)?),
        None => Ok(ProviderDirectory::builtin()),
    }
}

fn advance(sequencer: &mut StepSequencer) -> Result<(), AppError> {
    match sequencer.advance() {
        AdvanceOutcome::Blocked { .. } => Err(SubmitError::Invalid(sequencer.errors().clone()).into()),
        AdvanceOutcome::Advanced { .. } | AdvanceOutcome::AtFinalStep => Ok(()),
    }
}

fn run_eligibility(config: &AppConfig, args: EligibilityArgs) -> Result<(), AppError> {
    let engine = EligibilityEngine::standard(config.eligibility.guideline);
    let mut questionnaire = EligibilityQuestionnaire::new(engine, SystemClock);
    answer_questionnaire(questionnaire.sequencer_mut(), args)?;

    let result = questionnaire.submit()?;
    render_eligibility(&result);

    let store = JsonFileStore::new(&config.storage.session_path);
    let mut session = SessionState::load(&store)?;
    session.record_eligibility(&store, result)?;
    println!("\nSaved to {}", store.path().display());
    Ok(())
}

/// Walk the screening form to its last step, stopping at the first blocked step.
fn answer_questionnaire(form: &mut StepSequencer, args: EligibilityArgs) -> Result<(), AppError> {
    form.set_field(fields::HOUSEHOLD_SIZE, args.household_size);
    form.set_field(fields::ZIP_CODE, args.zip);
    form.set_field(fields::NEEDS_COVERAGE, args.coverage);
    advance(form)?;

    form.set_field(fields::HOUSEHOLD_MEMBERS, args.ages);
    advance(form)?;

    form.set_field(fields::ANNUAL_INCOME, args.income);
    advance(form)?;

    form.set_field(fields::EMPLOYMENT_STATUS, args.employment);
    advance(form)?;

    form.set_field(fields::IS_PREGNANT, args.pregnant);
    form.set_field(fields::HAS_DISABILITY, args.disability);
    form.set_field(fields::IS_FOSTER_CARE, args.foster_care);
    form.set_field(fields::IS_STUDENT, args.student);
    Ok(())
}

fn render_eligibility(result: &EligibilityResult) {
    println!("Eligibility results");
    println!(
        "Household of {} with annual income ${:.0}",
        result.household_size, result.income
    );
    println!(
        "Federal Poverty Level for this household: ${}",
        result.federal_poverty_level_threshold
    );
    println!("Income is {}% of FPL", result.income_percent_of_fpl);

    println!("\nQualifying programs");
    for program in &result.qualifying_programs {
        println!(
            "- {} [{}] {}: {}",
            program.name,
            program.category.label(),
            program.premium_label(),
            program.short_description
        );
    }
}

fn criteria_from_args(args: &ProviderArgs) -> FilterCriteria {
    FilterCriteria {
        provider_type: args.provider_type,
        specialty: args.specialty.clone(),
        language: args.language.clone(),
        gender: args.gender,
        state: args.state.clone(),
        accepting_new_patients: args.accepting,
        search_term: args.search.clone().unwrap_or_default(),
    }
}

fn run_providers(config: &AppConfig, args: ProviderArgs) -> Result<(), AppError> {
    let directory = load_directory(config)?;
    let mut search = ProviderSearch::new(&directory, config.providers.page_size);
    search.set_criteria(criteria_from_args(&args));
    search.go_to_page(args.page);

    render_provider_page(&search.current_page());
    Ok(())
}

fn render_provider_page(page: &Page<&Provider>) {
    if page.total_count == 0 {
        println!("No providers match the selected filters.");
        return;
    }

    println!(
        "Showing {}-{} of {} providers (page {} of {})",
        page.first_item_position(),
        page.first_item_position() + page.items.len() - 1,
        page.total_count,
        page.page_number,
        page.total_pages
    );
    for provider in &page.items {
        let accepting = if provider.accepting_new_patients {
            "accepting new patients"
        } else {
            "not accepting new patients"
        };
        println!(
            "- [{}] {} | {} | {} | {}, {} | {:.1} ({} reviews) | {}",
            provider.id,
            provider.name,
            provider.provider_type.label(),
            provider.specialty,
            provider.contact.city,
            provider.state,
            provider.rating,
            provider.review_count,
            accepting
        );
    }
}

fn run_provider_detail(config: &AppConfig, id: &str) -> Result<(), AppError> {
    let directory = load_directory(config)?;
    let Some(provider) = directory.find(id) else {
        println!("Provider '{id}' not found.");
        return Ok(());
    };

    println!("{}", provider.name);
    println!("Type: {}", provider.provider_type.label());
    println!("Specialty: {}", provider.specialty);
    println!("Organization: {}", provider.organization);
    println!("Gender: {}", provider.gender.label());
    println!("Languages: {}", provider.languages.join(", "));
    println!(
        "Rating: {:.1} from {} reviews",
        provider.rating, provider.review_count
    );
    println!(
        "Accepting new patients: {}",
        if provider.accepting_new_patients { "yes" } else { "no" }
    );
    if !provider.accessibility.is_empty() {
        println!("Accessibility: {}", provider.accessibility.join(", "));
    }
    println!(
        "Contact: {} | {}, {}, {} {}",
        provider.contact.phone,
        provider.contact.address,
        provider.contact.city,
        provider.state,
        provider.contact.zip
    );
    Ok(())
}

fn run_plans(config: &AppConfig, args: PlanArgs) -> Result<(), AppError> {
    let catalog = PlanCatalog::standard();

    if let Some(id) = &args.select {
        let Some(plan) = catalog.find(id) else {
            println!("Plan '{id}' not found.");
            return Ok(());
        };
        let store = JsonFileStore::new(&config.storage.session_path);
        let mut session = SessionState::load(&store)?;
        session.select_plan(&store, Some(plan.clone()))?;
        println!("Selected {} for enrollment.", plan.name);
        return Ok(());
    }

    if args.compare.is_empty() {
        println!("Available plans");
        for plan in catalog.plans() {
            render_plan(plan);
        }
        return Ok(());
    }

    let mut selection = ComparisonSelection::default();
    for id in &args.compare {
        if selection.toggle(id) == ToggleOutcome::Full {
            println!("Only three plans can be compared; skipping '{id}'.");
        }
    }

    println!("Plan comparison");
    for plan in selection.resolve(&catalog) {
        render_plan(plan);
    }
    Ok(())
}

fn render_plan(plan: &Plan) {
    println!(
        "- {} ({} {}) {} | deductible ${} | out-of-pocket max ${} | {}",
        plan.name,
        plan.tier.label(),
        plan.network.label(),
        plan.premium_label(),
        plan.deductible,
        plan.out_of_pocket_max,
        plan.eligibility
    );
}

fn run_session(config: &AppConfig) -> Result<(), AppError> {
    let store = JsonFileStore::new(&config.storage.session_path);
    let session = SessionState::load(&store)?;

    println!("Session stored at {}", store.path().display());
    println!("Signed in: {}", if session.logged_in { "yes" } else { "no" });
    println!("Language: {}", session.language.label());

    match &session.eligibility {
        Some(result) => println!(
            "Eligibility: {}% of FPL, {} qualifying program(s), checked {}",
            result.income_percent_of_fpl,
            result.qualifying_programs.len(),
            result.timestamp.format("%Y-%m-%d %H:%M UTC")
        ),
        None => println!("Eligibility: not checked"),
    }
    match &session.selected_plan {
        Some(plan) => println!("Selected plan: {}", plan.name),
        None => println!("Selected plan: none"),
    }
    match &session.enrollment {
        Some(record) => println!(
            "Enrollment: {} ({:?})",
            record.application_number, record.status
        ),
        None => println!("Enrollment: not started"),
    }
    Ok(())
}
