use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("geotag")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("geotag")
        .about("Resolve place names to coordinates through Wikipedia and Wikidata")
        .long_about(
            "Reads a newline-delimited file of place names, looks each one up on Wikipedia \
            (following redirects) and writes the first Wikidata coordinate of every location \
            to <FILE>_geotagged.csv.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(<FILE>)
                .required(true)
                .help("Newline-delimited file of location names")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}
