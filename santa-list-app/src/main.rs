use anyhow::Result;
use clap::{Parser, ValueEnum};
use santa_list::{FormController, FormError, Stdout, Transcript};
use santa_list_form_ratatui::RatatuiFormBackend;
use santa_list_wizard_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Frontend {
    /// All fields on one screen
    Form,
    /// One question at a time
    Wizard,
}

#[derive(Parser)]
#[command(name = "santa-list", about = "Get yourself onto Santa's gift list")]
struct Args {
    #[arg(long, value_enum, default_value_t = Frontend::Form, help = "How the form is presented")]
    frontend: Frontend,

    #[arg(long, help = "Plain, uncoloured prompts (wizard only)")]
    plain: bool,

    #[arg(long, default_value = "Santa's Gift List", help = "Title shown above the form")]
    title: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), FormError> {
    match args.frontend {
        Frontend::Form => {
            // The form owns the screen; its messages are printed once it closes.
            let mut controller = FormController::new(Transcript::new());
            let backend = RatatuiFormBackend::new().with_title(args.title.clone());
            let result = controller.run(&backend);
            for line in controller.console().lines() {
                println!("{line}");
            }
            result
        }
        Frontend::Wizard => {
            println!("=== {} ===", args.title);
            let backend = if args.plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };
            FormController::new(Stdout).run(&backend)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    tracing::debug!(frontend = ?args.frontend, "starting");

    match run(&args) {
        Ok(()) => Ok(()),
        Err(err) if err.is_cancelled() => {
            eprintln!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
