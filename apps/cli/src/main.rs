use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, CompanyStore, HttpCompanyStore};
use shared::domain::{Company, CompanyDraft, CompanyId};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage company records through the companies REST API")]
struct Cli {
    /// Backend base URL; overrides company_admin.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Print records as JSON instead of one line per record.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    List,
    Get {
        id: i64,
    },
    Create {
        name: String,
        location: String,
    },
    Update {
        id: i64,
        name: String,
        location: String,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings()
        .with_api_base_url(cli.api_url.clone())
        .validated()?;
    info!(api_base_url = %settings.api_base_url, "using companies backend");
    let store = HttpCompanyStore::from_settings(&settings);

    let output = run(&store, cli.command, cli.json).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

async fn run(store: &impl CompanyStore, command: Command, json: bool) -> Result<String> {
    match command {
        Command::List => {
            let companies = store.list().await.context("failed to list companies")?;
            if json {
                return Ok(serde_json::to_string_pretty(&companies)?);
            }
            if companies.is_empty() {
                return Ok("No companies found.".to_string());
            }
            Ok(companies
                .iter()
                .map(format_company)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Get { id } => {
            let company = store
                .get(CompanyId(id))
                .await
                .with_context(|| format!("failed to fetch company {id}"))?;
            render(&company, json)
        }
        Command::Create { name, location } => {
            let draft = checked_draft(name, location)?;
            let company = store
                .create(&draft)
                .await
                .context("failed to create company")?;
            render(&company, json)
        }
        Command::Update { id, name, location } => {
            let draft = checked_draft(name, location)?;
            let company = store
                .update(CompanyId(id), &draft)
                .await
                .with_context(|| format!("failed to update company {id}"))?;
            render(&company, json)
        }
        Command::Delete { id } => {
            store
                .delete(CompanyId(id))
                .await
                .with_context(|| format!("failed to delete company {id}"))?;
            Ok(format!("deleted id={id}"))
        }
    }
}

fn checked_draft(name: String, location: String) -> Result<CompanyDraft> {
    let draft = CompanyDraft::new(name.trim(), location.trim());
    draft.validate()?;
    Ok(draft)
}

fn render(company: &Company, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(company)?)
    } else {
        Ok(format_company(company))
    }
}

fn format_company(company: &Company) -> String {
    format!(
        "id={} name={} location={}",
        company.id, company.name, company.location
    )
}
