//! CLI runner - executes commands

use crate::cli::commands::{Cli, OutputFormat, QueryArgs};
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::host::{EnvSecretStore, LiteralEvaluator, PassthroughApplier};
use crate::models::{Book, Highlight, Record};
use crate::provider::ReadwiseProvider;
use crate::query::Query;
use crate::types::{Collection, JsonValue};
use std::fs;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let query = load_query(self.cli.command.args())?;
        let provider = ReadwiseProvider::new(
            config,
            Arc::new(EnvSecretStore::new()),
            Arc::new(LiteralEvaluator),
            Arc::new(PassthroughApplier),
        );

        let records = provider.query(self.cli.command.collection(), &query).await?;
        println!("{}", self.render(&records)?);
        Ok(())
    }

    /// Load provider config
    fn load_config(&self) -> Result<ProviderConfig> {
        match &self.cli.config {
            Some(path) => ProviderConfig::from_file(path),
            None => Ok(ProviderConfig::default()),
        }
    }

    fn render(&self, records: &[JsonValue]) -> Result<String> {
        render(self.cli.format, self.cli.command.collection(), records)
    }
}

fn render(format: OutputFormat, collection: Collection, records: &[JsonValue]) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(records)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(records)?,
        OutputFormat::Summary => match collection {
            Collection::Books => summarize::<Book>(records),
            Collection::Highlights => summarize::<Highlight>(records),
        },
    };
    Ok(rendered)
}

/// Records the view cannot read (e.g. after a projecting `select`) are
/// printed as compact JSON
fn summarize<T: Record>(records: &[JsonValue]) -> String {
    records
        .iter()
        .map(|record| match T::from_json(record) {
            Some(view) => view.summary(),
            None => record.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the query object, inline JSON taking precedence over a file
fn load_query(args: &QueryArgs) -> Result<Query> {
    if let Some(json_str) = &args.query {
        return serde_json::from_str(json_str)
            .map_err(|e| Error::config(format!("Invalid query JSON: {e}")));
    }

    if let Some(path) = &args.query_file {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read query file: {e}")))?;
        return serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid query JSON: {e}")));
    }

    Ok(Query::new())
}
