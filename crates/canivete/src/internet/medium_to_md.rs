use crate::prelude::{eprintln, println, *};
use canivete_core::config::Config;
use canivete_core::medium::{
    build_post_query, convert_post_response, sanitize_post_id, MediumError, MediumOutput,
};
use reqwest::StatusCode;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LONG_ABOUT: &str = "Converts a Medium post to markdown!

The post is fetched from Medium's GraphQL endpoint and its paragraphs are
rendered as Markdown. The result is printed as JSON with the markdown and the
post identifier.

Inspiration: https://scribe.rip/faq";

pub const EXAMPLES: &str = "Examples:
  canivete internet medium2md -i 4b63ff0e2bd3
  canivete internet medium2md -i https://medium.com/@bradleyalanlaplante/heres-everything-i-do-when-setting-up-a-new-computer-4b63ff0e2bd3
  canivete internet medium2md -i 4b63ff0e2bd3 -f -d";

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct MediumToMdOptions {
    /// the identifier of the post (e.g 4b63ff0e2bd3), or the full Medium URL
    #[arg(short = 'i', long, env = "MEDIUM_POST_ID")]
    pub post_id: String,

    /// writes the markdown to a file named <post-id>.md
    #[arg(short = 'f', long)]
    pub md_to_file: bool,

    /// writes the raw JSON fetched from Medium to a file named <post-id>.json
    #[arg(short = 'd', long)]
    pub json_to_file: bool,

    /// Directory for the files written by --md-to-file and --json-to-file (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Timeout in seconds (default: 10)
    #[arg(short, long, env = "MEDIUM_TIMEOUT")]
    pub timeout: Option<u64>,
}

pub async fn run(options: MediumToMdOptions, global: crate::Global, config: &Config) -> Result<()> {
    let post_id = sanitize_post_id(&options.post_id);
    let graphql_url = config.medium_graphql_url();
    let timeout = config.medium_timeout(options.timeout);

    if global.verbose {
        eprintln!("Medium GraphQL endpoint: {}", graphql_url);
        eprintln!("Post id: {}", post_id);
        eprintln!();
    }

    let spinner = std::io::stderr().is_terminal().then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(f!("Fetching post {}...", post_id));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    });

    let fetched = fetch_post_body(graphql_url, &post_id, timeout).await;

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let body = fetched?;
    let output = save_and_convert(&post_id, &body, &options)?;

    println!("{}", format_output_json(&output)?);

    Ok(())
}

/// Public data function - convert a fetched response body
pub fn medium_to_md_data(post_id: &str, body: &str) -> Result<MediumOutput> {
    convert_post_response(post_id, body).map_err(|e| -> color_eyre::eyre::Report {
        match e {
            MediumError::PostNotFound(id) => Error::NotFound(f!("post {}", id)).into(),
            other => eyre!("{}", other),
        }
    })
}

/// POST the GraphQL query and return the raw response body
async fn fetch_post_body(graphql_url: &str, post_id: &str, timeout: u64) -> Result<String> {
    use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

    log::debug!("Fetching post {} from {}", post_id, graphql_url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

    let response = client
        .post(graphql_url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json; charset=utf-8")
        .header(USER_AGENT, "canivete")
        .json(&build_post_query(post_id))
        .send()
        .await
        .map_err(|e| Error::Network(f!("Failed to fetch post {}: {}", post_id, e)))?;

    if let Some(err) = status_error(response.status(), post_id) {
        return Err(err.into());
    }

    response
        .text()
        .await
        .map_err(|e| Error::Network(f!("Failed to read response for post {}: {}", post_id, e)).into())
}

/// Convert the body, writing the files requested by `options`
///
/// The raw response is written before conversion so it is kept even when it
/// holds no post.
fn save_and_convert(post_id: &str, body: &str, options: &MediumToMdOptions) -> Result<MediumOutput> {
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    if options.json_to_file {
        let path = write_output_file(&output_dir, &f!("{}.json", post_id), body)?;
        log::info!("Wrote raw response to {}", path.display());
    }

    let output = medium_to_md_data(post_id, body)?;

    if options.md_to_file {
        let path = write_output_file(&output_dir, &f!("{}.md", post_id), &output.markdown)?;
        log::info!("Wrote markdown to {}", path.display());
    }

    Ok(output)
}

/// Map a non-success HTTP status to the error reported for `post_id`
fn status_error(status: StatusCode, post_id: &str) -> Option<Error> {
    if status.is_success() {
        return None;
    }

    if status == StatusCode::NOT_FOUND {
        return Some(Error::NotFound(f!("post {}", post_id)));
    }

    Some(Error::Network(f!(
        "Medium returned HTTP {} for post {}",
        status,
        post_id
    )))
}

/// Write `contents` to `dir/name`, creating the directory when needed
fn write_output_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| f!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| f!("Failed to write {}", path.display()))?;

    Ok(path)
}

fn format_output_json(output: &MediumOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
