use crate::error::{GeotagError, Result};
use crate::resolve::{Resolution, report_line, resolve_location};
use crate::table::{GeoRow, GeoTable};
use geotag_wiki::KnowledgeBase;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Appended to the input file name to name the CSV output
pub const OUTPUT_SUFFIX: &str = "_geotagged.csv";

/// Options for a geotagging run
#[derive(Debug, Clone)]
pub struct GeotagOptions {
    /// Print one line per location as it resolves
    pub verbose: bool,
    /// Write the table to `<input>_geotagged.csv`
    pub write_csv: bool,
    /// Track progress with a progress bar
    pub show_progress: bool,
}

impl Default for GeotagOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            write_csv: true,
            show_progress: false,
        }
    }
}

/// Read the location names from a newline-delimited file.
///
/// Every line yields one entry, trimmed of surrounding whitespace. Blank
/// lines are kept so the output stays aligned with the input.
pub fn load_locations(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| GeotagError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// `places.txt` -> `places.txt_geotagged.csv`
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Resolve every location in `input`, in order, one lookup at a time.
/// Returns the table of results, writing it next to the input when
/// `options.write_csv` is set.
pub async fn geotag<K: KnowledgeBase>(kb: &K, input: &Path, options: &GeotagOptions) -> Result<GeoTable> {
    let locations = load_locations(input)?;
    let source_file = input.to_string_lossy().into_owned();
    info!("Geotagging {} locations from {}", locations.len(), source_file);

    // No bar at all when stderr is not a terminal
    let progress = options
        .show_progress
        .then(|| {
            let pb = ProgressBar::new(locations.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb
        })
        .filter(|pb| !pb.is_hidden());

    let mut table = GeoTable::new();
    for location in &locations {
        if let Some(pb) = &progress {
            pb.set_message(location.clone());
        }

        let resolution = resolve_location(kb, location, options.verbose && progress.is_none()).await;
        if let Some(pb) = &progress {
            advance_progress(pb, location, &resolution, options.verbose);
        }

        debug!("{} -> {:?}", location, resolution);
        table.push(GeoRow::new(location.as_str(), resolution, source_file.as_str()));
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if options.write_csv {
        let output = output_path_for(input);
        table.write_csv(&output)?;
        info!("Wrote {} rows to {}", table.len(), output.display());
    }

    Ok(table)
}

/// Count one resolved location, printing its line to stdout with the bar cleared
fn advance_progress(pb: &ProgressBar, location: &str, resolution: &Resolution, verbose: bool) {
    if verbose {
        pb.suspend(|| println!("{}", report_line(location, resolution)));
    }
    pb.inc(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotag_wiki::Coordinate;

    #[test]
    fn test_advance_progress_counts_each_location() {
        let pb = ProgressBar::hidden();
        pb.set_length(2);
        advance_progress(&pb, "Paris", &Resolution::Found(Coordinate::new(48.856944, 2.351389)), true);
        advance_progress(&pb, "Qwzx", &Resolution::NoPage, false);
        assert_eq!(pb.position(), 2);
    }

    #[test]
    fn test_output_path_appends_suffix() {
        assert_eq!(
            output_path_for(Path::new("data/places.txt")),
            PathBuf::from("data/places.txt_geotagged.csv")
        );
        assert_eq!(
            output_path_for(Path::new("entities")),
            PathBuf::from("entities_geotagged.csv")
        );
    }

    #[test]
    fn test_default_options_log_and_write() {
        let options = GeotagOptions::default();
        assert!(options.verbose);
        assert!(options.write_csv);
        assert!(!options.show_progress);
    }
}
