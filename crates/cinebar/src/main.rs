//! cinebar - GTK4 player controls with fullscreen-aware auto-hide
//!
//! This is the main entry point for the cinebar player window.

mod css;
mod scheduler;
pub mod styles;
mod widgets;
mod window;

use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use gtk4::gio;
use gtk4::prelude::*;
use gtk4::Application;
use tracing::{debug, info, warn};

use cinebar_core::{Config, MediaInfo, logging};

use crate::scheduler::GlibScheduler;
use crate::window::PlayerWindow;

/// cinebar - GTK4 player controls with fullscreen-aware auto-hide
#[derive(Parser, Debug)]
#[command(name = "cinebar", version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (uses XDG lookup if not specified)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print example configuration and exit
    #[arg(long)]
    print_example_config: bool,

    /// Validate configuration and exit (returns non-zero on errors)
    #[arg(long)]
    check_config: bool,

    /// Media title shown in the header bar
    #[arg(long)]
    title: Option<String>,

    /// Media file or URI to show
    uri: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    // --print-example-config does not need a valid user config
    if args.print_example_config {
        print!("{}", cinebar_core::config::DEFAULT_CONFIG_TOML);
        return ExitCode::SUCCESS;
    }

    // If --config is specified, it must exist and be valid (no fallback)
    let load_result = match Config::find_and_load(args.config.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref source) = load_result.source {
        info!("Loaded configuration from {:?}", source);
    } else if load_result.used_defaults {
        warn!("Using default configuration (no config file found)");
    }

    let config = load_result.config;

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    debug!("Configuration validated successfully");

    if args.check_config {
        if let Some(ref source) = load_result.source {
            println!("Configuration valid: {}", source.display());
        } else {
            println!("Configuration valid (using defaults)");
        }
        println!("{}", config.summary());
        return ExitCode::SUCCESS;
    }

    run_gtk_app(config, args.title, args.uri)
}

fn run_gtk_app(config: Config, title: Option<String>, uri: Option<String>) -> ExitCode {
    let app = Application::builder()
        .application_id("io.github.cinebar")
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let quit = gio::SimpleAction::new("quit", None);
    {
        let app = app.downgrade();
        quit.connect_activate(move |_, _| {
            if let Some(app) = app.upgrade() {
                app.quit();
            }
        });
    }
    app.add_action(&quit);
    app.set_accels_for_action("app.quit", &["<Control>q"]);

    // The window's signal handlers hold weak references; the activate closure
    // keeps the strong one for the lifetime of the application.
    let player: Rc<RefCell<Option<Rc<PlayerWindow>>>> = Rc::new(RefCell::new(None));

    app.connect_activate(move |app| {
        info!("GTK application activated");

        if let Some(existing) = player.borrow().as_ref() {
            existing.present();
            return;
        }

        css::load_css();

        let window = PlayerWindow::new(app, &config, Rc::new(GlibScheduler::new()));

        // Command-line paths become file:// URIs like any other media location.
        let uri = uri
            .as_deref()
            .map(|arg| gio::File::for_commandline_arg(arg).uri().to_string());
        let info = MediaInfo::new(title.as_deref(), uri.as_deref());
        debug!("Initial media: {:?}", info);
        window.set_media(&info);

        window.present();
        *player.borrow_mut() = Some(window);
    });

    app.connect_startup(|_| {
        info!("GTK application starting up");
    });

    // Arguments were already parsed by clap; keep GTK from seeing them.
    let status = app.run_with_args::<&str>(&[]);
    if status == gtk4::glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
