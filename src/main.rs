//! Placement parser: skill extraction and resume scoring CLI

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use placement_parser::cli::{self, Cli, Commands};
use placement_parser::config::{Config, OutputFormat};
use placement_parser::input::InputManager;
use placement_parser::output::report::{AtsReport, BatchEntry, BatchReport, JobReport, MatchReport};
use placement_parser::output::{Report, ReportBody, ReportGenerator};
use placement_parser::processing::templates::{self, render_optimized_description};
use placement_parser::processing::ResumeFields;
use placement_parser::Engine;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const INPUT_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    if let Commands::Templates { name } = command {
        return show_templates(name.as_deref());
    }

    let engine = Engine::from_config(&config).context("Failed to build extraction engine")?;
    let mut input_manager = InputManager::new();
    let started = Instant::now();

    let (body, output, save) = match command {
        Commands::Parse { job, output, optimize, save } => {
            info!("Analyzing job description: {}", job.display());
            let text = read_input(&mut input_manager, &job).await?;
            let analysis = engine.parse_job_description(&text)?;
            if optimize {
                println!("{}", render_optimized_description(&analysis));
            }
            let body = ReportBody::Job(JobReport {
                job_file: display_name(&job),
                analysis,
            });
            (body, output, save)
        }
        Commands::Match { resume, job, output, save } => {
            info!("Matching {} against {}", resume.display(), job.display());
            let resume_text = read_input(&mut input_manager, &resume).await?;
            let job_text = read_input(&mut input_manager, &job).await?;
            let result = engine.match_texts(&resume_text, &job_text)?;
            let body = ReportBody::Match(MatchReport {
                resume_file: display_name(&resume),
                job_file: display_name(&job),
                result,
            });
            (body, output, save)
        }
        Commands::Ats { resume, summary, output, save } => {
            info!("Checking ATS readiness: {}", resume.display());
            let text = read_input(&mut input_manager, &resume).await?;
            let mut sections = ResumeFields::from_text(&text);
            if let Some(summary) = summary {
                sections.summary = Some(summary);
            }
            let result = engine.score_ats(&sections);
            let body = ReportBody::Ats(AtsReport {
                resume_file: display_name(&resume),
                sections,
                result,
            });
            (body, output, save)
        }
        Commands::Batch { job, resumes, output, save } => {
            info!("Ranking {} resumes against {}", resumes.len(), job.display());
            let job_text = read_input(&mut input_manager, &job).await?;
            let entries = run_batch(&engine, &mut input_manager, job_text, resumes).await;
            let body = ReportBody::Batch(BatchReport::new(display_name(&job), entries));
            (body, output, save)
        }
        Commands::Taxonomy => {
            show_taxonomy(&engine);
            return Ok(());
        }
        Commands::Templates { name } => return show_templates(name.as_deref()),
    };

    let format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };
    let report = Report::new(body, started.elapsed().as_millis() as u64);
    let use_colors = config.output.color_output && save.is_none() && format == OutputFormat::Console;
    let rendered = ReportGenerator::new(use_colors).generate(&report, format)?;

    match save {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("💾 Report saved to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn show_templates(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let template = templates::template(name).with_context(|| {
                format!(
                    "Unknown template '{}'. Available: {}",
                    name,
                    templates::template_names().join(", ")
                )
            })?;
            print!("{}", template.to_job_text());
        }
        None => {
            println!("📚 Job templates:");
            for template in templates::TEMPLATES {
                println!(
                    "  • {} ({}): {}",
                    template.title,
                    template.experience,
                    template.required_skills.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn show_taxonomy(engine: &Engine) {
    let taxonomy = engine.taxonomy();
    println!(
        "🗂️  Skill taxonomy: {} categories, {} skills",
        taxonomy.categories().len(),
        taxonomy.skill_count()
    );
    for category in taxonomy.categories() {
        println!("  • {}: {}", category, taxonomy.skills_in(category).join(", "));
    }
}

async fn read_input(input_manager: &mut InputManager, path: &Path) -> Result<String> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
    let text = input_manager
        .read_text(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text)
}

/// Read resumes in order, then score them concurrently on the blocking pool.
async fn run_batch(
    engine: &Engine,
    input_manager: &mut InputManager,
    job_text: String,
    resumes: Vec<PathBuf>,
) -> Vec<BatchEntry> {
    let mut entries = Vec::with_capacity(resumes.len());
    let mut handles = Vec::new();

    for path in resumes {
        let name = display_name(&path);
        match read_input(input_manager, &path).await {
            Ok(text) => {
                let engine = engine.clone();
                let job_text = job_text.clone();
                let handle = tokio::task::spawn_blocking(move || engine.match_texts(&text, &job_text));
                handles.push((name, handle));
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", name, e);
                entries.push(failed_entry(name, format!("{:#}", e)));
            }
        }
    }

    for (name, handle) in handles {
        let entry = match handle.await {
            Ok(Ok(result)) => BatchEntry {
                resume_file: name,
                match_score: Some(result.match_score),
                matched_skills: result.matched_total,
                missing_skills: result.missing_total,
                error: None,
            },
            Ok(Err(e)) => failed_entry(name, e.to_string()),
            Err(e) => failed_entry(name, format!("worker failed: {}", e)),
        };
        entries.push(entry);
    }

    entries
}

fn failed_entry(resume_file: String, error: String) -> BatchEntry {
    BatchEntry {
        resume_file,
        match_score: None,
        matched_skills: 0,
        missing_skills: 0,
        error: Some(error),
    }
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
