use anyhow::Context;
use clap::{Parser, Subcommand};
use labour_adda_dashboard::{Router, Section, render};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "labour-adda")]
#[command(about = "Labour Adda survey dashboard chart specs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dashboard sections in sidebar order.
    Sections,

    /// Emit the chart specs of one section as JSON.
    Show {
        /// Section name or sidebar label, e.g. "skills" or "Skill Mapping".
        section: String,

        #[arg(long)]
        pretty: bool,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Emit every section as one dashboard document.
    Export {
        #[arg(long)]
        pretty: bool,

        #[arg(short = 'o', long)]
        out: String,
    },

    /// List registered datasets.
    Datasets,

    /// Dump one registered dataset as JSON.
    Dataset {
        name: String,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let router = Router::builtin().context("build dataset registry")?;
    debug!("registry holds {} datasets", router.registry().len());

    match cli.cmd {
        Commands::Sections => {
            for s in Section::ALL {
                println!("{:<14} {:<24} {}", s.name(), s.label(), s.heading());
            }
        }
        Commands::Show {
            section,
            pretty,
            out,
        } => {
            let section = Section::resolve(&section)?;
            debug!("resolved section {}", section);

            let view = router
                .view(section)
                .with_context(|| format!("build section {}", section))?;
            info!("section {} produced {} charts", section, view.charts.len());

            let json = render::render_section(&view, pretty)?;
            write_or_print(out.as_deref(), &json)?;
        }
        Commands::Export { pretty, out } => {
            let dashboard = router.dashboard().context("build dashboard")?;
            info!(
                "dashboard: {} sections, {} charts",
                dashboard.totals.sections, dashboard.totals.charts
            );

            let json = render::render_dashboard(&dashboard, pretty)?;
            write_or_print(Some(&out), &json)?;
        }
        Commands::Datasets => {
            for name in router.registry().names() {
                println!("{}", name);
            }
        }
        Commands::Dataset { name, pretty } => {
            let table = router.registry().get(&name)?;
            println!("{}", render::render_table(table, pretty)?);
        }
    }

    Ok(())
}

fn write_or_print(out: Option<&str>, json: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("write {}", path))?;
            info!("wrote {} bytes to {}", json.len(), path);
            println!("Wrote {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
