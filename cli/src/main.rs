use clap::{Parser, Subcommand, ValueEnum};
use cli::commands::{self, CliError};
use cli::http::HttpApi;
use deck::api::DEFAULT_BACKEND_URL;
use deck::types::{BlockKind, Theme};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deckctl", about = "Presentation editor command-line client")]
struct Cli {
    #[arg(long, env = "DECK_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Origin used to print the public address after publishing.
    #[arg(long, env = "DECK_PUBLIC_ORIGIN", default_value = "http://localhost:3000")]
    public_origin: String,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects.
    Projects,
    /// Create a project.
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
        theme: ThemeArg,
    },
    /// List a project's blocks.
    Blocks { project_id: String },
    /// Append an empty block to a project.
    AddBlock {
        project_id: String,
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// Publish a project under a slug.
    Publish { project_id: String, slug: String },
    /// Render a published page.
    View {
        /// Slug, `/p/<slug>` path, or full public URL.
        target: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Gradient,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Gradient => Theme::Gradient,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Heading,
    Text,
    Image,
}

impl From<KindArg> for BlockKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Heading => BlockKind::Heading,
            KindArg::Text => BlockKind::Text,
            KindArg::Image => BlockKind::Image,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(cli.backend_url)?;
    tracing::debug!(backend = api.base_url(), "deck cli starting");

    let editor = commands::session(api);
    let output = match cli.command {
        Command::Projects => commands::projects(&editor, cli.json).await?,
        Command::Create { title, theme } => commands::create(&editor, &title, theme.into(), cli.json).await?,
        Command::Blocks { project_id } => commands::blocks(&editor, &project_id, cli.json).await?,
        Command::AddBlock { project_id, kind } => commands::add_block(&editor, &project_id, kind.into(), cli.json).await?,
        Command::Publish { project_id, slug } => {
            commands::publish(&editor, &project_id, &slug, &cli.public_origin).await?
        }
        Command::View { target } => commands::view(editor.api(), &target, cli.json).await?,
    };
    println!("{output}");
    Ok(())
}
