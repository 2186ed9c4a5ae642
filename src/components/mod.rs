mod booking_row;
mod metric_tile;

pub use booking_row::BookingRow;
pub use metric_tile::MetricTile;
