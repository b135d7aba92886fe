//! Command handlers and terminal rendering
//!
//! Each subcommand builds a [`Workflow`] against the configured job
//! board, triggers the initial fetch, and drives the controller. The
//! delete confirmation lives here, in front of the controller, not
//! inside it.

use crate::config::Config;
use crate::interaction::{TerminalInteraction, UserInteraction};
use crate::job::{ExperienceLevel, Job, JobType};
use crate::stats::JobStats;
use crate::store::HttpJobStore;
use crate::view::TypeFilter;
use crate::workflow::{Theme, ViewMode, Workflow};
use anyhow::Result;
use std::sync::Arc;

fn setup(config: &Config) -> Result<(Workflow, Arc<dyn UserInteraction>)> {
    let store = Arc::new(HttpJobStore::new(&config.api_url)?);
    let interaction: Arc<dyn UserInteraction> = Arc::new(TerminalInteraction::new());
    let mut workflow = Workflow::new(store, interaction.clone());
    workflow.set_view_mode(config.view_mode);
    workflow.set_theme(config.theme);
    Ok((workflow, interaction))
}

/// `jobdeck list [--search term] [--type filter] [--mode grid|list]`
pub async fn run_list(
    search: Option<String>,
    filter: Option<TypeFilter>,
    mode: Option<ViewMode>,
) -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, interaction) = setup(&config)?;
    if !workflow.refresh().await {
        anyhow::bail!("could not reach the job board");
    }

    if let Some(term) = search {
        workflow.set_search_term(&term);
    }
    if let Some(filter) = filter {
        workflow.set_type_filter(filter);
    }
    if let Some(mode) = mode {
        workflow.set_view_mode(mode);
    }

    let jobs = workflow.visible_jobs();
    render_jobs(&jobs, workflow.view_mode());
    let noun = if jobs.len() == 1 { "job" } else { "jobs" };
    interaction.display_info(&format!("{} {noun} found", jobs.len()));
    Ok(())
}

/// `jobdeck show <id>`
pub async fn run_show(id: i64) -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, interaction) = setup(&config)?;
    if !workflow.refresh().await {
        anyhow::bail!("could not reach the job board");
    }

    match workflow.collection().get(id) {
        Some(job) => render_job_card(job),
        None => interaction.notify_failure(&format!("No job with id {id}")),
    }
    Ok(())
}

/// `jobdeck add`
pub async fn run_add() -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, interaction) = setup(&config)?;
    workflow.refresh().await;

    workflow.add_new();
    fill_form(&mut workflow, interaction.as_ref()).await?;
    workflow.submit().await;
    Ok(())
}

/// `jobdeck edit <id>`
pub async fn run_edit(id: i64) -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, interaction) = setup(&config)?;
    if !workflow.refresh().await {
        anyhow::bail!("could not reach the job board");
    }

    let Some(job) = workflow.collection().get(id).cloned() else {
        interaction.notify_failure(&format!("No job with id {id}"));
        return Ok(());
    };
    workflow.edit(&job);
    fill_form(&mut workflow, interaction.as_ref()).await?;
    workflow.submit().await;
    Ok(())
}

/// `jobdeck delete <id> [--yes]`
pub async fn run_delete(id: i64, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, interaction) = setup(&config)?;
    workflow.refresh().await;

    if !yes {
        let title = workflow
            .collection()
            .get(id)
            .map(|job| job.title.clone())
            .unwrap_or_else(|| format!("job {id}"));
        let message = format!(
            "Are you sure you want to delete \"{title}\"? This action cannot be undone."
        );
        if !interaction.confirm(&message).await? {
            interaction.display_info("Delete cancelled");
            return Ok(());
        }
    }

    workflow.delete_job(id).await;
    Ok(())
}

/// `jobdeck stats`
pub async fn run_stats() -> Result<()> {
    let config = Config::load()?;
    let (mut workflow, _interaction) = setup(&config)?;
    if !workflow.refresh().await {
        anyhow::bail!("could not reach the job board");
    }

    workflow.show_dashboard();
    render_stats(&workflow.stats(), workflow.recent_jobs());
    Ok(())
}

/// `jobdeck config [--api-url URL] [--theme T] [--view-mode M]`
///
/// With no flags, prints the current configuration; with flags, updates
/// and persists it.
pub fn run_config(
    api_url: Option<String>,
    theme: Option<Theme>,
    view_mode: Option<ViewMode>,
) -> Result<()> {
    let mut config = Config::load()?;

    let updating = api_url.is_some() || theme.is_some() || view_mode.is_some();
    if let Some(url) = api_url {
        config.api_url = url;
    }
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if let Some(mode) = view_mode {
        config.view_mode = mode;
    }

    if updating {
        config.save()?;
        println!("Configuration saved");
    }
    println!("api_url   = {}", config.api_url);
    println!("theme     = {:?}", config.theme);
    println!("view_mode = {:?}", config.view_mode);
    Ok(())
}

/// Drive the form session field by field through the interaction
/// channel. In edit mode, pressing Enter keeps the existing value.
async fn fill_form(workflow: &mut Workflow, ui: &dyn UserInteraction) -> Result<()> {
    let editing = workflow.form().source_id().is_some();
    if editing {
        ui.display_info("Edit Job (press Enter to keep the current value)");
    } else {
        ui.display_info("Add New Job");
    }

    // Title, with autocomplete
    loop {
        let current = workflow.form().draft().title.clone();
        let hint = if editing && !current.is_empty() {
            current.clone()
        } else {
            "e.g., Software Engineer".to_string()
        };
        let input = ui.prompt("Job Title *", &hint).await?;
        if input.is_empty() && !current.is_empty() {
            break;
        }
        if input.is_empty() {
            ui.notify_failure("Title is required");
            continue;
        }
        workflow.form_mut().set_title(&input);
        offer_suggestions(workflow, ui).await?;
        break;
    }

    prompt_required(workflow, ui, Field::Company, editing).await?;
    prompt_required(workflow, ui, Field::Location, editing).await?;

    // Optional enumerated fields
    let type_options = JobType::ALL.map(|t| t.label()).join(", ");
    let input = ui.prompt("Job Type", &type_options).await?;
    if let Ok(job_type) = input.parse::<JobType>() {
        workflow.form_mut().set_job_type(Some(job_type));
    }

    let experience_options = ExperienceLevel::ALL.map(|e| e.label()).join(", ");
    let input = ui.prompt("Experience Level", &experience_options).await?;
    if let Ok(level) = input.parse::<ExperienceLevel>() {
        workflow.form_mut().set_experience(Some(level));
    }

    let input = ui.prompt("Salary Range", "e.g., $80,000 - $120,000").await?;
    if !input.is_empty() {
        workflow.form_mut().set_salary(&input);
    }

    let input = ui.prompt("Job Description", "").await?;
    if !input.is_empty() {
        workflow.form_mut().set_description(&input);
    }

    Ok(())
}

enum Field {
    Company,
    Location,
}

async fn prompt_required(
    workflow: &mut Workflow,
    ui: &dyn UserInteraction,
    field: Field,
    editing: bool,
) -> Result<()> {
    let (label, placeholder) = match field {
        Field::Company => ("Company *", "e.g., Tech Corp"),
        Field::Location => ("Location *", "e.g., New York, NY"),
    };
    loop {
        let current = match field {
            Field::Company => workflow.form().draft().company.clone(),
            Field::Location => workflow.form().draft().location.clone(),
        };
        let hint = if editing && !current.is_empty() {
            current.clone()
        } else {
            placeholder.to_string()
        };
        let input = ui.prompt(label, &hint).await?;
        if input.is_empty() && !current.is_empty() {
            return Ok(());
        }
        if input.is_empty() {
            ui.notify_failure(&format!("{} is required", label.trim_end_matches(" *")));
            continue;
        }
        match field {
            Field::Company => workflow.form_mut().set_company(&input),
            Field::Location => workflow.form_mut().set_location(&input),
        }
        return Ok(());
    }
}

/// Offer the current title suggestions; a number picks one, Enter
/// keeps the typed title.
async fn offer_suggestions(workflow: &mut Workflow, ui: &dyn UserInteraction) -> Result<()> {
    let suggestions: Vec<&str> = workflow.form().suggestions().to_vec();
    if suggestions.is_empty() {
        return Ok(());
    }

    for (i, candidate) in suggestions.iter().enumerate() {
        ui.display_info(&format!("  {}. {candidate}", i + 1));
    }
    let input = ui
        .prompt("Pick a suggestion", "number, or Enter to keep")
        .await?;
    if let Ok(choice) = input.trim().parse::<usize>() {
        if (1..=suggestions.len()).contains(&choice) {
            workflow.form_mut().select_suggestion(suggestions[choice - 1]);
            return Ok(());
        }
    }
    workflow.form_mut().close_suggestions();
    Ok(())
}

fn render_jobs(jobs: &[Job], mode: ViewMode) {
    match mode {
        ViewMode::List => {
            for job in jobs {
                render_job_line(job);
            }
        }
        ViewMode::Grid => {
            for job in jobs {
                render_job_card(job);
                println!();
            }
        }
    }
}

fn render_job_line(job: &Job) {
    let id = job.id.map(|id| id.to_string()).unwrap_or_default();
    println!(
        "{:>4}  {:<30} {:<20} {:<16} {}",
        id,
        job.title,
        job.company,
        job.location,
        job.type_label()
    );
}

fn render_job_card(job: &Job) {
    if let Some(id) = job.id {
        println!("#{id} {}", job.title);
    } else {
        println!("{}", job.title);
    }
    println!("   {} • {}", job.company, job.location);
    println!("   {}", job.type_label());
    if let Some(experience) = job.experience {
        println!("   Experience: {experience}");
    }
    if let Some(salary) = &job.salary {
        println!("   Salary: {salary}");
    }
    if let Some(description) = &job.description {
        println!("   {description}");
    }
}

fn render_stats(stats: &JobStats, recent: &[Job]) {
    println!("Dashboard Overview");
    println!();
    println!("  Total Jobs:  {}", stats.total);
    println!("  Companies:   {}", stats.companies);
    println!("  Locations:   {}", stats.locations);
    println!("  Job Types:   {}", stats.types.len());
    println!();

    if !stats.types.is_empty() {
        println!("Job Type Distribution");
        for (label, count) in &stats.types {
            let percentage = stats.percentage(*count);
            let filled = (percentage / 100.0 * 30.0).round() as usize;
            println!(
                "  {:<14} {:<30} {count} ({percentage:.0}%)",
                label,
                "█".repeat(filled)
            );
        }
        println!();
    }

    if !recent.is_empty() {
        println!("Recent Jobs");
        for job in recent {
            println!(
                "  {} — {} • {} [{}]",
                job.title,
                job.company,
                job.location,
                job.type_label()
            );
        }
    }
}
