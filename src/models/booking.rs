use serde::{Deserialize, Serialize};

/// One confirmed reservation. Immutable once issued by the ledger;
/// removed only by cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub movie: String,
    pub showtime: String,
    pub tickets: u32,
}
