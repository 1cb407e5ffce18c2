use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kjv_core::{Millis, ObserverSupport, PageRuntime, Viewport};
use kjv_site::{api, assembly, config::SiteConfig, render};

#[derive(Parser)]
#[command(name = "kjv")]
#[command(about = "Kenduguri Jatiya Vidyalaya website: render, preview and simulate")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the rendered site
    Serve {
        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Write the static site to a directory
    Render {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the section outline with reveal triggers and delays
    Outline {
        /// Viewport width used to resolve grid columns
        #[arg(short, long, default_value = "1280")]
        width: f64,
    },
    /// Scroll a simulated visitor down the page and print each reveal
    Simulate {
        #[arg(long, default_value = "1280")]
        width: f64,

        #[arg(long, default_value = "800")]
        height: f64,

        /// Pixels scrolled per step (at least 1)
        #[arg(long, default_value = "400")]
        step: f64,

        /// Milliseconds between steps
        #[arg(long, default_value = "250")]
        interval: Millis,

        /// Behave like a browser without intersection observation
        #[arg(long)]
        no_observer: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "kjv_site=debug,kjv_core=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(mut config: SiteConfig, port: Option<u16>, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let state = api::AppState::new().context("Failed to render page")?;
    let app = api::create_router(state);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("KJV site listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

fn simulate(
    width: f64,
    height: f64,
    step: f64,
    interval: Millis,
    no_observer: bool,
) -> anyhow::Result<()> {
    let support = if no_observer {
        ObserverSupport::Unsupported
    } else {
        ObserverSupport::Supported
    };
    let mut runtime = PageRuntime::new(Viewport::new(width, height), support);
    let sections = assembly::mount_page(&mut runtime)?;
    assembly::simulate_visit(&mut runtime, step, interval)?;

    for record in runtime.reveal_log() {
        println!("{:>6} ms  {:<22} {}", record.at, record.section, record.key);
    }
    println!(
        "{} reveals, navbar scrolled: {}",
        runtime.reveal_log().len(),
        runtime.nav().is_scrolled()
    );

    assembly::unmount_page(&mut runtime, &sections)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SiteConfig::load();

    match cli.command {
        Some(Commands::Serve { port, bind }) => serve(config, port, bind).await?,
        Some(Commands::Render { out }) => {
            let out = out.unwrap_or(config.out_dir);
            let written = render::write_site(&out)?;
            println!("Wrote {} files to {}", written.len(), out.display());
        }
        Some(Commands::Outline { width }) => {
            print!("{}", render::outline::render_outline(&assembly::page_plan(), width));
        }
        Some(Commands::Simulate {
            width,
            height,
            step,
            interval,
            no_observer,
        }) => simulate(width, height, step, interval, no_observer)?,
        None => serve(config, None, None).await?,
    }

    Ok(())
}
