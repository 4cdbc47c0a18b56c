use std::io::{self, BufRead, Write};

use crate::error::BookingError;
use crate::App;

/// Which of the two screens the terminal is showing. The UI is a two-panel
/// toggle over one shared ledger; the mode lives here, never in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Booking,
    Summary,
}

/// Runs the menu on stdin/stdout until the user exits.
pub fn run(app: &mut App) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(app)
}

/// Terminal menu over the booking ledger. Generic over reader and writer so
/// tests can drive the loop with scripted input.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Menu { input, output }
    }

    pub fn run(&mut self, app: &mut App) -> io::Result<()> {
        match self.run_loop(app) {
            // closed input is a normal way to leave the menu
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    fn run_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut screen = Screen::Booking;
        loop {
            match screen {
                Screen::Booking => {
                    self.print_menu()?;
                    let choice = self.prompt("Select an option: ")?;
                    match choice.as_str() {
                        "1" => self.book_tickets(app)?,
                        "2" => self.cancel_by_customer(app)?,
                        "3" => self.cancel_by_booking_id(app)?,
                        "4" => screen = Screen::Summary,
                        "5" => break,
                        other => writeln!(self.output, "Unknown option: {}", other)?,
                    }
                }
                Screen::Summary => {
                    self.print_summary(app)?;
                    self.prompt("Press Enter to return to booking: ")?;
                    screen = Screen::Booking;
                }
            }
        }
        Ok(())
    }

    /* ---------- actions ---------- */

    fn book_tickets(&mut self, app: &mut App) -> io::Result<()> {
        let customer_id = self.prompt("Customer ID: ")?;
        let customer_name = self.prompt("Customer Name: ")?;

        self.print_numbered("Movies:", app.ledger.catalog().movies())?;
        let raw_movie = self.prompt("Select movie (number or name): ")?;
        let movie = resolve_choice(app.ledger.catalog().movies(), &raw_movie);

        let showtimes = app
            .ledger
            .catalog()
            .showtimes(&movie)
            .unwrap_or(&[])
            .to_vec();
        if !showtimes.is_empty() {
            self.print_numbered("Showtimes:", &showtimes)?;
        }
        let raw_showtime = self.prompt("Select showtime (number or name): ")?;
        let showtime = resolve_choice(&showtimes, &raw_showtime);

        let tickets = self.prompt("Number of Tickets: ")?;

        match app
            .ledger
            .create_booking(&customer_id, &customer_name, &movie, &showtime, &tickets)
        {
            Ok(booking_id) => {
                writeln!(self.output, "Booking confirmed! Booking ID: {}", booking_id)
            }
            Err(err) => writeln!(self.output, "{}", status_message(&err, &movie, &showtime)),
        }
    }

    fn cancel_by_customer(&mut self, app: &mut App) -> io::Result<()> {
        let customer_id = self.prompt("Customer ID to cancel: ")?;
        if customer_id.is_empty() {
            return writeln!(self.output, "Please enter a Customer ID to delete");
        }
        match app.ledger.cancel_booking(&customer_id) {
            Ok(removed) => writeln!(
                self.output,
                "Booking for Customer ID {} deleted successfully",
                removed.customer_id
            ),
            Err(_) => writeln!(
                self.output,
                "No booking found for Customer ID {}",
                customer_id
            ),
        }
    }

    fn cancel_by_booking_id(&mut self, app: &mut App) -> io::Result<()> {
        let booking_id = self.prompt("Booking ID to cancel: ")?;
        if booking_id.is_empty() {
            return writeln!(self.output, "Please enter a Booking ID to delete");
        }
        match app.ledger.cancel_booking_by_id(&booking_id) {
            Ok(removed) => writeln!(
                self.output,
                "Booking {} for Customer ID {} deleted successfully",
                removed.booking_id, removed.customer_id
            ),
            Err(_) => writeln!(self.output, "No booking found for Booking ID {}", booking_id),
        }
    }

    /* ---------- rendering ---------- */

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Movie Ticket Booking System ===")?;
        writeln!(self.output, "1. Book tickets")?;
        writeln!(self.output, "2. Cancel booking by customer ID")?;
        writeln!(self.output, "3. Cancel booking by booking ID")?;
        writeln!(self.output, "4. View bookings")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    fn print_numbered(&mut self, label: &str, items: &[String]) -> io::Result<()> {
        writeln!(self.output, "{}", label)?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, item)?;
        }
        Ok(())
    }

    fn print_summary(&mut self, app: &App) -> io::Result<()> {
        let bookings = app.ledger.bookings();
        if bookings.is_empty() {
            return writeln!(self.output, "No bookings have been made yet.");
        }
        writeln!(self.output, "=== BOOKING SUMMARY ===")?;
        writeln!(self.output)?;
        writeln!(self.output, "Total Bookings: {}", bookings.len())?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{:<15}{:<20}{:<20}{:<15}{:<10}{}",
            "Customer ID", "Customer Name", "Movie", "Showtime", "Tickets", "Booking ID"
        )?;
        writeln!(self.output, "{}", "-".repeat(80))?;
        for booking in bookings {
            writeln!(
                self.output,
                "{:<15}{:<20}{:<20}{:<15}{:<10}{}",
                booking.customer_id,
                booking.customer_name,
                booking.movie,
                booking.showtime,
                booking.tickets,
                booking.booking_id
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

/// Resolves a 1-based index into the list; anything else passes through as
/// a literal for the ledger to validate.
fn resolve_choice(items: &[String], raw: &str) -> String {
    if let Ok(index) = raw.parse::<usize>() {
        if let Some(item) = index.checked_sub(1).and_then(|i| items.get(i)) {
            return item.clone();
        }
    }
    raw.to_string()
}

fn status_message(err: &BookingError, movie: &str, showtime: &str) -> String {
    match err {
        BookingError::InvalidCustomerId => {
            "Please enter a valid Customer ID (alphanumeric)".to_string()
        }
        BookingError::InvalidCustomerName => {
            "Please enter a valid Customer Name (letters and spaces)".to_string()
        }
        BookingError::InvalidMovie(_) => "Please select a movie".to_string(),
        BookingError::InvalidShowtime(_) => "Please select a showtime".to_string(),
        BookingError::InvalidTicketCount { max } => {
            format!("Please enter 1 to {} tickets", max)
        }
        BookingError::InsufficientSeats { available } => {
            format!(
                "Only {} seats available for {} at {}",
                available, movie, showtime
            )
        }
        BookingError::NotFound(id) => format!("No booking found for Customer ID {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run_script(script: &str) -> (App, String) {
        let mut app = App::new(Config::default());
        let mut output = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut output)
            .run(&mut app)
            .unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn books_and_renders_summary() {
        let script = "1\nabc123\nJane Doe\n1\n1\n3\n4\n\n5\n";
        let (app, output) = run_script(script);
        assert!(output.contains("Booking confirmed! Booking ID: T001"));
        assert!(output.contains("=== BOOKING SUMMARY ==="));
        assert!(output.contains("Total Bookings: 1"));
        assert!(output.contains("abc123"));
        assert_eq!(app.ledger.available_seats("Avengers", "12:00 PM"), Some(47));
    }

    #[test]
    fn accepts_literal_movie_and_showtime_names() {
        let script = "1\nu1\nJane Doe\nInception\n6:00 PM\n2\n5\n";
        let (app, output) = run_script(script);
        assert!(output.contains("Booking confirmed! Booking ID: T001"));
        assert_eq!(app.ledger.available_seats("Inception", "6:00 PM"), Some(48));
    }

    #[test]
    fn out_of_range_index_reads_as_unknown_movie() {
        let script = "1\nu1\nJane Doe\n7\n1\n2\n5\n";
        let (app, output) = run_script(script);
        assert!(output.contains("Please select a movie"));
        assert!(app.ledger.bookings().is_empty());
    }

    #[test]
    fn reports_ticket_count_problems() {
        let script = "1\nu1\nJane Doe\n1\n1\neleven\n5\n";
        let (_, output) = run_script(script);
        assert!(output.contains("Please enter 1 to 10 tickets"));
    }

    #[test]
    fn cancel_flows_report_status() {
        let script = "1\nabc123\nJane Doe\n1\n1\n3\n2\nabc123\n2\nabc123\n5\n";
        let (app, output) = run_script(script);
        assert!(output.contains("Booking for Customer ID abc123 deleted successfully"));
        assert!(output.contains("No booking found for Customer ID abc123"));
        assert_eq!(app.ledger.available_seats("Avengers", "12:00 PM"), Some(50));
    }

    #[test]
    fn closed_input_exits_cleanly() {
        let script = "1\nabc123\nJane Doe\n";
        let (app, _) = run_script(script);
        assert!(app.ledger.bookings().is_empty());
    }

    #[test]
    fn empty_summary_shows_placeholder() {
        let script = "4\n\n5\n";
        let (_, output) = run_script(script);
        assert!(output.contains("No bookings have been made yet."));
    }
}
