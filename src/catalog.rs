use std::collections::HashMap;

use crate::config::BookingConfig;

/// Fixed set of movies and their showtimes. Built once from configuration,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<String>,
    showtimes: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(config: &BookingConfig) -> Self {
        // The reference configuration shares one showtime list across all
        // movies; lookups still go per movie so a config may vary them.
        let showtimes = config
            .movies
            .iter()
            .map(|movie| (movie.clone(), config.showtimes.clone()))
            .collect();
        Catalog {
            movies: config.movies.clone(),
            showtimes,
        }
    }

    /// Movie names in the order they are presented to the caller.
    pub fn movies(&self) -> &[String] {
        &self.movies
    }

    /// Showtime labels for one movie, in presentation order.
    pub fn showtimes(&self, movie: &str) -> Option<&[String]> {
        self.showtimes.get(movie).map(Vec::as_slice)
    }

    pub fn contains_movie(&self, movie: &str) -> bool {
        self.showtimes.contains_key(movie)
    }

    pub fn has_showtime(&self, movie: &str, showtime: &str) -> bool {
        self.showtimes(movie)
            .is_some_and(|labels| labels.iter().any(|label| label == showtime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_presentation_order() {
        let catalog = Catalog::new(&BookingConfig::default());
        assert_eq!(catalog.movies(), ["Avengers", "Inception", "The Matrix"]);
        assert_eq!(
            catalog.showtimes("The Matrix").unwrap(),
            ["12:00 PM", "3:00 PM", "6:00 PM", "9:00 PM"]
        );
    }

    #[test]
    fn membership_checks_are_exact() {
        let catalog = Catalog::new(&BookingConfig::default());
        assert!(catalog.contains_movie("Inception"));
        assert!(!catalog.contains_movie("inception"));
        assert!(catalog.has_showtime("Inception", "3:00 PM"));
        assert!(!catalog.has_showtime("Inception", "3:00PM"));
        assert!(!catalog.has_showtime("Tenet", "3:00 PM"));
        assert!(catalog.showtimes("Tenet").is_none());
    }
}
