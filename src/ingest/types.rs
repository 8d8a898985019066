use crate::subtitles::SubtitleEntry;
use serde::{Deserialize, Serialize};

/// The movie a batch of quotes belongs to
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MovieRef {
    pub title: String,
    pub year: i32,
    pub imdb_id: Option<String>,
}

impl MovieRef {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
            imdb_id: None,
        }
    }

    pub fn with_imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = Some(imdb_id.into());
        self
    }
}

/// How the movie named by an uploader was matched against the metadata service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    Verified,
    /// A match was found but its title or year differs from the input
    AutoCorrected,
    /// No match; the uploader's input is used as-is
    Unverified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub movie: MovieRef,
    pub status: ResolutionStatus,
}

impl Resolution {
    /// Feedback line for the uploader
    pub fn message(&self) -> String {
        match self.status {
            ResolutionStatus::Verified => format!(
                "Verified '{}' ({}).",
                self.movie.title, self.movie.year
            ),
            ResolutionStatus::AutoCorrected => format!(
                "Auto-corrected: Found '{}' ({}) matching your input.",
                self.movie.title, self.movie.year
            ),
            ResolutionStatus::Unverified => format!(
                "Could not verify metadata. Using '{}' ({}) as entered.",
                self.movie.title, self.movie.year
            ),
        }
    }
}

/// Parsed entries ready to be stored under one movie
///
/// Entry order is the display order; storage is expected to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    pub movie: MovieRef,
    pub entries: Vec<SubtitleEntry>,
}

impl ImportBatch {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based display position
    pub fn sequenced(&self) -> impl Iterator<Item = (usize, &SubtitleEntry)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn summary(&self) -> String {
        format!(
            "Successfully imported {} lines for \"{}\"!",
            self.len(),
            self.movie.title
        )
    }
}
