use std::fmt::{ Display, Formatter };

/// Display state of a booking badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }

    /// Tailwind colour classes for the badge pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Confirmed => "bg-green-100 text-green-800",
            Self::Pending => "bg-yellow-100 text-yellow-800",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Booking {
    pub name: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub status: BookingStatus,
}

impl Booking {
    /// "name - description", as shown on the first line of a booking row.
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

pub const RECENT_BOOKINGS: [Booking; 2] = [
    Booking {
        name: "John Smith",
        description: "Table for 4",
        time: "Today at 7:00 PM",
        status: BookingStatus::Confirmed,
    },
    Booking {
        name: "Sarah Johnson",
        description: "Haircut Appointment",
        time: "Tomorrow at 2:30 PM",
        status: BookingStatus::Pending,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_bookings_order() {
        let statuses: Vec<_> = RECENT_BOOKINGS.iter().map(|b| b.status).collect();
        assert_eq!(statuses, vec![BookingStatus::Confirmed, BookingStatus::Pending]);
    }

    #[test]
    fn test_booking_title() {
        assert_eq!(RECENT_BOOKINGS[0].title(), "John Smith - Table for 4");
        assert_eq!(RECENT_BOOKINGS[1].title(), "Sarah Johnson - Haircut Appointment");
    }

    #[test]
    fn test_status_badge_styling() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "Confirmed");
        assert_eq!(BookingStatus::Pending.to_string(), "Pending");
        assert!(BookingStatus::Confirmed.badge_class().contains("green"));
        assert!(BookingStatus::Pending.badge_class().contains("yellow"));
    }
}
