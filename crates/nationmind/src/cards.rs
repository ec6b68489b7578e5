use std::path::{Path, PathBuf};

use nationmind_view::NationCard;

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid card data in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a JSON array of `{name, resources, power}` objects.
pub fn load_cards(path: &Path) -> Result<Vec<NationCard>, CardError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CardError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render cards one after another, separated by a blank line.
pub fn render_cards(cards: &[NationCard]) -> String {
    cards
        .iter()
        .map(NationCard::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
