use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::models::Booking;

/// In-memory store of bookings and seat availability. Owns the booking
/// list, the seat table and the id counter; validates every request against
/// the catalog before mutating anything, so a failed call never leaves a
/// partial write behind.
#[derive(Debug)]
pub struct Ledger {
    catalog: Catalog,
    bookings: Vec<Booking>,
    seats: HashMap<String, HashMap<String, u32>>,
    counter: u32,
    max_tickets: u32,
}

impl Ledger {
    pub fn new(config: &BookingConfig) -> Self {
        let catalog = Catalog::new(config);
        let mut seats = HashMap::new();
        for movie in catalog.movies() {
            let per_showtime: HashMap<String, u32> = catalog
                .showtimes(movie)
                .unwrap_or(&[])
                .iter()
                .map(|showtime| (showtime.clone(), config.seat_capacity))
                .collect();
            seats.insert(movie.clone(), per_showtime);
        }
        Ledger {
            catalog,
            bookings: Vec::new(),
            seats,
            counter: 0,
            max_tickets: config.max_tickets_per_booking,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current bookings, oldest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn available_seats(&self, movie: &str, showtime: &str) -> Option<u32> {
        self.seats
            .get(movie)
            .and_then(|per_showtime| per_showtime.get(showtime))
            .copied()
    }

    /* ---------- operations ---------- */

    /// Validates the raw request and, if every check passes, records a new
    /// booking and takes its seats. Checks run in a fixed order and the
    /// first failure wins; nothing mutates on any failure path.
    pub fn create_booking(
        &mut self,
        customer_id: &str,
        customer_name: &str,
        movie: &str,
        showtime: &str,
        tickets: &str,
    ) -> Result<String, BookingError> {
        validate_customer_id(customer_id)?;
        validate_customer_name(customer_name)?;
        if !self.catalog.contains_movie(movie) {
            return Err(BookingError::InvalidMovie(movie.to_string()));
        }
        if !self.catalog.has_showtime(movie, showtime) {
            return Err(BookingError::InvalidShowtime(showtime.to_string()));
        }
        let tickets = parse_ticket_count(tickets, self.max_tickets)?;

        let remaining = self
            .seats
            .get_mut(movie)
            .and_then(|per_showtime| per_showtime.get_mut(showtime))
            .ok_or_else(|| BookingError::InvalidShowtime(showtime.to_string()))?;
        if tickets > *remaining {
            tracing::debug!(
                "rejected booking for {} at {}: {} requested, {} available",
                movie,
                showtime,
                tickets,
                remaining
            );
            return Err(BookingError::InsufficientSeats {
                available: *remaining,
            });
        }
        *remaining -= tickets;

        self.counter += 1;
        let booking_id = format!("T{:03}", self.counter);
        self.bookings.push(Booking {
            booking_id: booking_id.clone(),
            customer_id: customer_id.to_string(),
            customer_name: customer_name.to_string(),
            movie: movie.to_string(),
            showtime: showtime.to_string(),
            tickets,
        });
        tracing::info!(
            "booking {} confirmed: {} ticket(s) for {} at {}",
            booking_id,
            tickets,
            movie,
            showtime
        );
        Ok(booking_id)
    }

    /// Removes the earliest booking with this customer id and returns its
    /// seats to the table. First match only; repeated calls peel off later
    /// bookings one at a time.
    pub fn cancel_booking(&mut self, customer_id: &str) -> Result<Booking, BookingError> {
        let position = self
            .bookings
            .iter()
            .position(|booking| booking.customer_id == customer_id)
            .ok_or_else(|| BookingError::NotFound(customer_id.to_string()))?;
        Ok(self.remove_at(position))
    }

    /// Removes the booking with this unique booking id.
    pub fn cancel_booking_by_id(&mut self, booking_id: &str) -> Result<Booking, BookingError> {
        let position = self
            .bookings
            .iter()
            .position(|booking| booking.booking_id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;
        Ok(self.remove_at(position))
    }

    fn remove_at(&mut self, position: usize) -> Booking {
        let booking = self.bookings.remove(position);
        if let Some(remaining) = self
            .seats
            .get_mut(&booking.movie)
            .and_then(|per_showtime| per_showtime.get_mut(&booking.showtime))
        {
            *remaining += booking.tickets;
        }
        tracing::info!(
            "booking {} cancelled, {} seat(s) returned for {} at {}",
            booking.booking_id,
            booking.tickets,
            booking.movie,
            booking.showtime
        );
        booking
    }
}

/* ---------- validation ---------- */

// ^[A-Za-z0-9]+$
fn validate_customer_id(customer_id: &str) -> Result<(), BookingError> {
    if customer_id.is_empty() || !customer_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BookingError::InvalidCustomerId);
    }
    Ok(())
}

// ^[A-Za-z\s]+$
fn validate_customer_name(customer_name: &str) -> Result<(), BookingError> {
    if customer_name.is_empty()
        || !customer_name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
    {
        return Err(BookingError::InvalidCustomerName);
    }
    Ok(())
}

fn parse_ticket_count(raw: &str, max: u32) -> Result<u32, BookingError> {
    match raw.parse::<u32>() {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(BookingError::InvalidTicketCount { max }),
    }
}
