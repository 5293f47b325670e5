use tracing::info;

use crate::models::{Movie, SeatTable};

/// One seat table per movie, created up front and kept for the life of the process.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    theatres: [SeatTable; Movie::COUNT],
}

impl MovieCatalog {
    pub fn new(capacity: usize) -> Self {
        info!("Building catalog: {} movies, {} seats each", Movie::COUNT, capacity);
        Self {
            theatres: std::array::from_fn(|_| SeatTable::new(capacity)),
        }
    }

    pub fn seats(&self, movie: Movie) -> &SeatTable {
        &self.theatres[movie.index()]
    }

    pub fn seats_mut(&mut self, movie: Movie) -> &mut SeatTable {
        &mut self.theatres[movie.index()]
    }

    pub fn movies(&self) -> impl Iterator<Item = (Movie, &SeatTable)> {
        Movie::ALL.into_iter().zip(self.theatres.iter())
    }
}
