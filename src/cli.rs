// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::{LoadState, ResumeApp};
use crate::app_log;
use crate::core::{AppConfig, ConfigManager, ServiceClient};
use crate::form::Draft;
use crate::render::PdfExporter;
use crate::types::{ListField, ProjectField, ResumeData, ResumeId, ScalarField};
use crate::utils::parse_project_spec;
use crate::view::{render_draft, render_resume_list};

#[derive(Parser)]
#[command(name = "resume-builder")]
#[command(about = "Build, submit, list and export resumes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL (overrides RESUME_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for exported PDFs
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List stored resumes
    List,
    /// Build a draft and submit it to the backend
    Create(CreateArgs),
    /// Export stored resumes to PDF
    Export {
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        id: Option<u64>,
        #[arg(long)]
        all: bool,
    },
    /// Export a resume JSON file to PDF without contacting the backend
    Render {
        #[arg(long)]
        from: PathBuf,
    },
    /// Check that the backend is up
    Health,
}

#[derive(Args, Default)]
pub struct CreateArgs {
    /// Start from a draft JSON file. Scalar flags override its fields; any
    /// list flag replaces that whole list from the file.
    #[arg(long)]
    pub from: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub education: Vec<String>,
    #[arg(long)]
    pub experience: Vec<String>,
    #[arg(long = "skill")]
    pub skills: Vec<String>,
    /// "Title::Description::tech1,tech2"
    #[arg(long = "project")]
    pub projects: Vec<String>,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ConfigManager::load(cli.config.as_deref())?
        .with_api_url(cli.api_url)
        .with_output_dir(cli.out);

    match cli.command {
        Command::List => {
            let mut app = connect(&config)?;
            load_or_bail(&mut app).await?;
            print!("{}", render_resume_list(app.resumes()));
        }

        Command::Create(args) => {
            let mut app = connect(&config)?;
            let draft = build_draft(&args).await?;
            app.replace_draft(draft);
            print!("{}", render_draft(app.draft()));

            match app.submit().await {
                Ok(created) => {
                    app_log!(info, "Created resume {} for {}", created.id, created.data.name);
                    print!("{}", render_resume_list(app.resumes()));
                }
                Err(e) => {
                    app_log!(error, "Submission failed: {}", e);
                    anyhow::bail!("{}", e.user_message());
                }
            }
        }

        Command::Export { id, all } => {
            let mut app = connect(&config)?;
            load_or_bail(&mut app).await?;
            let exporter = PdfExporter::from_config(&config);

            let selected = match id {
                Some(id) if !all => {
                    let id = ResumeId(id);
                    match app.find(id) {
                        Some(resume) => vec![resume.clone()],
                        None => vec![app
                            .backend()
                            .get_resume(id)
                            .await
                            .with_context(|| format!("Resume {} not found", id))?],
                    }
                }
                _ => app.resumes().to_vec(),
            };

            if selected.is_empty() {
                app_log!(warn, "No resumes to export");
            }
            for resume in &selected {
                let exported = exporter.export(&resume.data).await?;
                report_export(&exported);
            }
        }

        Command::Render { from } => {
            let data = read_resume_json(&from).await?;
            let exported = PdfExporter::from_config(&config).export(&data).await?;
            report_export(&exported);
        }

        Command::Health => {
            let client = ServiceClient::new(&config.api_base_url, config.timeout)?;
            let health = client.health().await?;
            if health.is_healthy() {
                app_log!(info, "Backend healthy: {}", health.message.unwrap_or_default());
            } else {
                anyhow::bail!("Backend reported status {}", health.status);
            }
        }
    }

    Ok(())
}

fn connect(config: &AppConfig) -> Result<ResumeApp<ServiceClient>> {
    let client = ServiceClient::new(&config.api_base_url, config.timeout)?;
    Ok(ResumeApp::new(client))
}

async fn load_or_bail(app: &mut ResumeApp<ServiceClient>) -> Result<()> {
    if app.load().await == LoadState::Failed {
        anyhow::bail!("{}", app.error().unwrap_or("Failed to load resumes"));
    }
    Ok(())
}

fn report_export(exported: &crate::render::ExportedPdf) {
    if exported.fallback {
        app_log!(warn, "Wrote placeholder document to {}", exported.path.display());
    }
    println!("{}", exported.path.display());
}

async fn read_resume_json(path: &PathBuf) -> Result<ResumeData> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resume JSON: {}", path.display()))
}

/// Apply CLI flags to a draft through the form operations.
pub async fn build_draft(args: &CreateArgs) -> Result<Draft> {
    let mut draft = match &args.from {
        Some(path) => {
            let mut data = read_resume_json(path).await?;
            for (field, values) in [
                (ListField::Education, &args.education),
                (ListField::Experience, &args.experience),
                (ListField::Skills, &args.skills),
            ] {
                if !values.is_empty() {
                    data.list_mut(field).clear();
                }
            }
            if !args.projects.is_empty() {
                data.projects.clear();
            }
            Draft::from_data(data)
        }
        None => Draft::new(),
    };

    let scalars = [
        (ScalarField::Name, &args.name),
        (ScalarField::Email, &args.email),
        (ScalarField::Phone, &args.phone),
    ];
    for (field, value) in scalars {
        if let Some(value) = value {
            draft = draft.set_scalar(field, value.as_str());
        }
    }

    let lists = [
        (ListField::Education, &args.education),
        (ListField::Experience, &args.experience),
        (ListField::Skills, &args.skills),
    ];
    for (field, values) in lists {
        draft = draft.with_list(field, values)?;
    }

    for (index, spec) in args.projects.iter().enumerate() {
        let project = parse_project_spec(spec)?;
        if index >= draft.data().projects.len() {
            draft = draft.add_project();
        }
        draft = draft
            .set_project_field(index, ProjectField::Title, project.title)?
            .set_project_field(index, ProjectField::Description, project.description)?;
        for (tech_index, tech) in project.technologies.into_iter().enumerate() {
            if tech_index >= draft.data().projects[index].technologies.len() {
                draft = draft.add_technology(index)?;
            }
            draft = draft.set_technology(index, tech_index, tech)?;
        }
    }

    Ok(draft)
}
