use crate::views::Dashboard;
use super::common::{ between, render, setup };

#[test]
fn test_dashboard_header() {
    setup();
    let html = render(Dashboard);

    assert!(html.contains("🦁 Blue Lion Dashboard"));
    assert!(html.contains("Welcome, Admin"));
    assert!(html.contains("Recent Bookings"));
}

#[test]
fn test_dashboard_metric_tiles() {
    let html = render(Dashboard);

    assert_eq!(html.matches("<dt").count(), 3);
    assert_eq!(html.matches("<dd").count(), 3);

    let pairs = [("Total Bookings", "24"), ("Active Customers", "156"), ("Revenue", "$12,450")];
    for (label, value) in pairs {
        let after_label = between(&html, label, "</dd>").expect("tile rendered");
        assert!(
            after_label.ends_with(&format!(">{}", value)),
            "{} should be paired with {}, got {}",
            label,
            value,
            after_label
        );
    }
}

#[test]
fn test_dashboard_booking_entries() {
    let html = render(Dashboard);

    assert_eq!(html.matches("<li").count(), 2);
    assert_eq!(html.matches("rounded-full").count(), 2);

    let first = between(&html, "<li", "</li>").expect("first booking");
    assert!(first.contains("John Smith - Table for 4"));
    assert!(first.contains("Today at 7:00 PM"));
    assert!(first.contains(">Confirmed<"));
    assert!(first.contains("bg-green-100 text-green-800"));

    let rest = &html[html.find("</li>").unwrap() + "</li>".len()..];
    let second = between(rest, "<li", "</li>").expect("second booking");
    assert!(second.contains("Sarah Johnson - Haircut Appointment"));
    assert!(second.contains("Tomorrow at 2:30 PM"));
    assert!(second.contains(">Pending<"));
    assert!(second.contains("bg-yellow-100 text-yellow-800"));
}

#[test]
fn test_dashboard_render_is_idempotent() {
    let first = render(Dashboard);
    let second = render(Dashboard);
    assert_eq!(first, second);
}
