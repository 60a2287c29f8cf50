//! Command implementations. Each returns the text to print so the binary
//! stays a thin dispatcher.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::cell::RefCell;

use deck::api::{ApiError, DeckApi};
use deck::editor::{Editor, PublishOutcome};
use deck::store::{ProjectStore, StoreCell};
use deck::types::{Block, BlockKind, Project, Theme};
use deck::viewer::{self, ViewerState};

/// Editor over a plain `RefCell`; one CLI invocation is one session.
pub type CliEditor<A> = Editor<A, RefCell<ProjectStore>>;

/// Errors surfaced to the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no project with id `{0}`")]
    UnknownProject(String),
    #[error("nothing to publish: slug is empty")]
    EmptySlug,
    #[error("{0}")]
    PublishFailed(String),
    #[error("missing slug")]
    MissingSlug,
    #[error("page `{0}` is unavailable")]
    PageUnavailable(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Start a fresh editor session over `api`.
pub fn session<A: DeckApi>(api: A) -> CliEditor<A> {
    Editor::new(api, RefCell::new(ProjectStore::default()))
}

/// `deckctl projects`
///
/// # Errors
///
/// Returns backend errors and JSON encoding failures.
pub async fn projects<A: DeckApi>(editor: &CliEditor<A>, json: bool) -> Result<String, CliError> {
    let projects = editor.api().list_projects().await?;
    editor.store().update_store(|s| s.set_projects(projects.clone()));
    if json {
        return Ok(serde_json::to_string_pretty(&projects)?);
    }
    Ok(projects.iter().map(project_line).collect::<Vec<_>>().join("\n"))
}

/// `deckctl create`
///
/// # Errors
///
/// Returns backend errors.
pub async fn create<A: DeckApi>(
    editor: &CliEditor<A>,
    title: &str,
    theme: Theme,
    json: bool,
) -> Result<String, CliError> {
    editor.store().update_store(|s| {
        title.clone_into(&mut s.title);
        s.theme = theme;
    });
    let project = editor.create_project().await?;
    if json {
        return Ok(serde_json::to_string_pretty(&project)?);
    }
    Ok(format!("created {}", project_line(&project)))
}

/// `deckctl blocks <project_id>`
///
/// # Errors
///
/// Returns backend errors or `UnknownProject`.
pub async fn blocks<A: DeckApi>(editor: &CliEditor<A>, project_id: &str, json: bool) -> Result<String, CliError> {
    open(editor, project_id).await?;
    let blocks = editor.store().with_store(|s| s.blocks.clone());
    if json {
        return Ok(serde_json::to_string_pretty(&blocks)?);
    }
    Ok(blocks.iter().map(block_line).collect::<Vec<_>>().join("\n"))
}

/// `deckctl add-block <project_id> <kind>`
///
/// # Errors
///
/// Returns backend errors or `UnknownProject`.
pub async fn add_block<A: DeckApi>(
    editor: &CliEditor<A>,
    project_id: &str,
    kind: BlockKind,
    json: bool,
) -> Result<String, CliError> {
    open(editor, project_id).await?;
    let block = editor
        .add_block(kind)
        .await?
        .ok_or_else(|| CliError::UnknownProject(project_id.to_owned()))?;
    if json {
        return Ok(serde_json::to_string_pretty(&block)?);
    }
    Ok(format!("added {}", block_line(&block)))
}

/// `deckctl publish <project_id> <slug>`
///
/// # Errors
///
/// Returns `EmptySlug` without contacting the publish endpoint, or the
/// backend's rejection message.
pub async fn publish<A: DeckApi>(
    editor: &CliEditor<A>,
    project_id: &str,
    slug: &str,
    origin: &str,
) -> Result<String, CliError> {
    if slug.is_empty() {
        return Err(CliError::EmptySlug);
    }
    open(editor, project_id).await?;
    editor.store().update_store(|s| slug.clone_into(&mut s.slug));
    match editor.publish(origin).await {
        PublishOutcome::Published { url } => Ok(url),
        PublishOutcome::Failed { message } => Err(CliError::PublishFailed(message)),
        PublishOutcome::Skipped => Err(CliError::EmptySlug),
    }
}

/// `deckctl view <slug | /p/slug | url>`
///
/// # Errors
///
/// Returns `MissingSlug` for an empty target or `PageUnavailable` when the
/// page cannot be fetched.
pub async fn view<A: DeckApi + ?Sized>(api: &A, target: &str, json: bool) -> Result<String, CliError> {
    let slug = if target.contains("/p/") { viewer::slug_from_path(target) } else { Some(target) };
    let Some(slug) = slug.filter(|s| !s.is_empty()) else {
        return Err(CliError::MissingSlug);
    };
    match viewer::load_page(api, slug).await {
        ViewerState::Loaded(page) if json => Ok(serde_json::to_string_pretty(&page)?),
        ViewerState::Loaded(page) => Ok(viewer::render_text(&page)),
        ViewerState::MissingSlug => Err(CliError::MissingSlug),
        ViewerState::Loading | ViewerState::Failed => Err(CliError::PageUnavailable(slug.to_owned())),
    }
}

async fn open<A: DeckApi>(editor: &CliEditor<A>, project_id: &str) -> Result<Project, CliError> {
    editor
        .open_project(project_id)
        .await?
        .ok_or_else(|| CliError::UnknownProject(project_id.to_owned()))
}

fn project_line(project: &Project) -> String {
    let slug = project.slug.as_deref().map(|s| format!("  /p/{s}")).unwrap_or_default();
    format!("{}  {}  [{}]{slug}", project.id, project.title, project.theme.as_str())
}

fn block_line(block: &Block) -> String {
    format!("{}  #{}  {}  {:?}", block.id, block.order, block.kind.as_str(), block.content)
}
