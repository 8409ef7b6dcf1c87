use colored::Colorize;
use commands::command_argument_builder;
use geotag::handlers::{cli_options, format_summary, init_tracing, run_geotag};
use geotag_core::output_path_for;
use geotag_wiki::WikiConfig;
use std::path::PathBuf;

mod commands;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();
    init_tracing();

    let input = matches
        .get_one::<PathBuf>("FILE")
        .expect("clap should ensure FILE is present");
    let options = cli_options();

    match run_geotag(input, WikiConfig::from_env(), &options).await {
        Ok(table) => {
            let output = options.write_csv.then(|| output_path_for(input));
            print!("{}", format_summary(&table.summary(), output.as_deref()));
        }
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
