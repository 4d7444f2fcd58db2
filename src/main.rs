//! Muwanx CLI - build and serve browser-based MuJoCo demos
//!
//! Usage: muwanx <COMMAND>
//!
//! Commands:
//!   export  Export a project file as a bundle or a config document
//!   run     Export a bundle, then serve it
//!   launch  Serve an exported bundle directory
//!   routes  Print the route of every project

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = dispatch(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let json = cli.json;
    let verbose = cli.verbose;

    match cli.command {
        Commands::Export {
            project,
            out,
            format,
            overwrite,
            base_path,
        } => commands::export::cmd_export(
            &project, &out, format, overwrite, base_path, json, verbose,
        ),
        Commands::Run {
            project,
            out,
            host,
            port,
            no_browser,
        } => commands::run::cmd_run(&project, &out, host, port, no_browser, json, verbose),
        Commands::Launch {
            dir,
            host,
            port,
            no_browser,
        } => commands::launch::cmd_launch(&dir, host, port, no_browser, json),
        Commands::Routes { project } => commands::routes::cmd_routes(&project, json),
    }
}
