use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Movies currently on screen. The order here is the order of the selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Movie {
    #[default]
    Amaran,
    Leo,
    VadaChennai,
    Manmadhan,
}

impl Movie {
    pub const COUNT: usize = 4;

    pub const ALL: [Movie; Movie::COUNT] = [
        Movie::Amaran,
        Movie::Leo,
        Movie::VadaChennai,
        Movie::Manmadhan,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Movie::Amaran => "AMARAN",
            Movie::Leo => "LEO",
            Movie::VadaChennai => "VADACHENNAI",
            Movie::Manmadhan => "MANMADHAN",
        }
    }

    /// Position in [`Movie::ALL`], used to index per-movie storage.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown movie: {0}")]
pub struct ParseMovieError(pub String);

impl FromStr for Movie {
    type Err = ParseMovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Movie::ALL
            .into_iter()
            .find(|movie| movie.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMovieError(s.to_string()))
    }
}
