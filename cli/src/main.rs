use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use canvas::{CanvasError, DrawingSurface};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use cli::api::{HttpRemote, RemoteError, RemoteStore};
use cli::output::{self, OutputFormat};
use cli::script::{self, ScriptError};
use cli::sync::{SyncClient, SyncError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("unsupported output extension for {0}; use .svg, .png, .jpg or .jpeg")]
    UnsupportedOutput(String),
    #[error("{0} is not in the server's file list")]
    UnknownFile(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sketchpad-cli", about = "Sketchpad drawing and SVG store CLI")]
struct Cli {
    #[arg(long, env = "SKETCHPAD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// List saved SVG files, newest name first.
    List,
    /// Download a saved SVG verbatim.
    Fetch {
        file_name: String,
        #[arg(long, help = "Output file path; stdout when omitted")]
        out: Option<PathBuf>,
    },
    /// Replay a gesture script onto a fresh canvas.
    Draw(DrawArgs),
    /// Load a saved SVG onto a canvas and write the result as PNG.
    Load(LoadArgs),
}

#[derive(Args, Debug)]
struct Viewport {
    #[arg(long, default_value_t = 1280)]
    viewport_width: u32,

    #[arg(long, default_value_t = 800)]
    viewport_height: u32,

    #[arg(long, default_value_t = false)]
    grid: bool,
}

#[derive(Args, Debug)]
struct DrawArgs {
    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    script: String,

    #[command(flatten)]
    viewport: Viewport,

    #[arg(long, help = "Write the canvas to a .svg, .png, .jpg or .jpeg file")]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Upload the canvas to the server")]
    save: bool,
}

#[derive(Args, Debug)]
struct LoadArgs {
    file_name: String,

    #[command(flatten)]
    viewport: Viewport,

    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let remote = HttpRemote::new(cli.base_url);

    match cli.command {
        Command::Ping => run_ping(&remote).await,
        Command::List => run_list(&remote).await,
        Command::Fetch { file_name, out } => run_fetch(&remote, &file_name, out.as_deref()).await,
        Command::Draw(args) => run_draw(remote, args).await,
        Command::Load(args) => run_load(remote, args).await,
    }
}

async fn run_ping(remote: &HttpRemote) -> Result<(), CliError> {
    let health = remote.health().await?;
    print_json(&health)
}

async fn run_list(remote: &HttpRemote) -> Result<(), CliError> {
    for file_name in remote.list().await? {
        println!("{file_name}");
    }
    Ok(())
}

async fn run_fetch(remote: &HttpRemote, file_name: &str, out: Option<&Path>) -> Result<(), CliError> {
    let bytes = remote.fetch(file_name).await?;
    match out {
        Some(path) => write_file(path, &bytes).await,
        None => io::stdout().write_all(&bytes).map_err(|source| CliError::Io { path: "stdout".to_owned(), source }),
    }
}

async fn run_draw(remote: HttpRemote, args: DrawArgs) -> Result<(), CliError> {
    let raw = read_script(&args.script).await?;
    let steps = script::parse_script(&raw)?;
    let mut surface = new_surface(&args.viewport)?;
    let strokes = script::apply(&mut surface, &steps)?;
    info!(steps = steps.len(), strokes, "script applied");

    if let Some(path) = &args.out {
        write_canvas(&surface, path).await?;
    }

    if args.save {
        let mut client = SyncClient::new(remote);
        let saved = client.save_current(&surface).await?;
        eprintln!("{}", client.status().message);
        println!("{}", saved.path);
    }
    Ok(())
}

async fn run_load(remote: HttpRemote, args: LoadArgs) -> Result<(), CliError> {
    let mut surface = new_surface(&args.viewport)?;
    let mut client = SyncClient::new(remote);
    client.refresh_list().await?;
    if !client.files_mut().select(&args.file_name) {
        return Err(CliError::UnknownFile(args.file_name));
    }
    client.load_selected(&mut surface).await?;
    eprintln!("{}", client.status().message);

    let png = surface.export_png()?;
    write_file(&args.out, &png).await
}

fn new_surface(viewport: &Viewport) -> Result<DrawingSurface, CliError> {
    let mut surface = DrawingSurface::for_viewport(viewport.viewport_width, viewport.viewport_height)?;
    if viewport.grid {
        surface.set_grid(true);
    }
    Ok(surface)
}

async fn write_canvas(surface: &DrawingSurface, path: &Path) -> Result<(), CliError> {
    let format = OutputFormat::from_path(path).ok_or_else(|| CliError::UnsupportedOutput(path.display().to_string()))?;
    let bytes = output::render(surface, format)?;
    write_file(path, &bytes).await
}

async fn read_script(source: &str) -> Result<String, CliError> {
    if source == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .map_err(|source| CliError::Io { path: "stdin".to_owned(), source })?;
        return Ok(raw);
    }
    tokio::fs::read_to_string(source)
        .await
        .map_err(|error| CliError::Io { path: source.to_owned(), source: error })
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
    eprintln!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
