use geotag_wiki::{Coordinate, KnowledgeBase, WikiError};
use tracing::debug;

/// Legacy marker for "page found, no coordinate data"
pub const NO_COORDINATES_SENTINEL: (f64, f64) = (-100000.0, -100000.0);
/// Legacy marker for "no page found, including no redirect target"
pub const NO_PAGE_SENTINEL: (f64, f64) = (-200000.0, -200000.0);

/// Outcome of resolving one location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// First coordinate claim of the location's item
    Found(Coordinate),
    /// The page (or its redirect target) has an item without coordinate claims
    NoCoordinates,
    /// Neither the page nor a redirect target could be resolved
    NoPage,
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Found(coordinate) => Some(*coordinate),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The numeric pair older consumers of geotag output expect, with the
    /// -100000/-200000 markers standing in for unresolved locations.
    pub fn sentinel_pair(&self) -> (f64, f64) {
        match self {
            Resolution::Found(c) => (c.latitude, c.longitude),
            Resolution::NoCoordinates => NO_COORDINATES_SENTINEL,
            Resolution::NoPage => NO_PAGE_SENTINEL,
        }
    }
}

/// Human-readable line describing how `location` resolved
pub fn report_line(location: &str, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Found(c) => format!("{} {} {}", location, c.latitude, c.longitude),
        Resolution::NoCoordinates => format!("No geographic data for {}", location),
        Resolution::NoPage => format!("No Wikipedia page exists for {}", location),
    }
}

/// Resolve a place name to coordinates.
///
/// The page named `location` is looked up directly first. If that lookup fails
/// for any reason, the page's redirect target is tried instead. Failures never
/// escape: they end up as [`Resolution::NoPage`]. When `verbose` is set, one
/// line describing the outcome is printed to stdout.
pub async fn resolve_location<K: KnowledgeBase>(kb: &K, location: &str, verbose: bool) -> Resolution {
    let location = location.trim();

    let resolution = match resolve_direct(kb, location).await {
        Ok(resolution) => resolution,
        Err(direct_err) => {
            debug!("Direct lookup of '{}' failed: {}", location, direct_err);
            match resolve_via_redirect(kb, location).await {
                Ok(resolution) => resolution,
                Err(redirect_err) => {
                    debug!("Redirect lookup of '{}' failed: {}", location, redirect_err);
                    Resolution::NoPage
                }
            }
        }
    };

    if verbose {
        println!("{}", report_line(location, &resolution));
    }
    resolution
}

async fn resolve_direct<K: KnowledgeBase>(kb: &K, title: &str) -> Result<Resolution, WikiError> {
    let item = kb.item_for_page(title).await?;
    let coordinates = kb.coordinates(&item).await?;
    Ok(first_coordinate(coordinates))
}

async fn resolve_via_redirect<K: KnowledgeBase>(kb: &K, title: &str) -> Result<Resolution, WikiError> {
    let target = kb.redirect_target(title).await?;
    debug!("Following redirect '{}' -> '{}'", title, target);
    resolve_direct(kb, &target).await
}

fn first_coordinate(coordinates: Vec<Coordinate>) -> Resolution {
    coordinates
        .into_iter()
        .next()
        .map(Resolution::Found)
        .unwrap_or(Resolution::NoCoordinates)
}
