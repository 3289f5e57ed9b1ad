//! Fixed-width summary line for a surviving log entry.
//!
//! ```text
//! Jan  1 00:00:01 | proto=TCP  in=eth0  out=wlan1 src=10.0.0.5:5000         dest=8.8.8.8:443
//! ```
//!
//! Widths are minimums; longer values push the following columns right
//! instead of being truncated. Absent fields print as padding.

use crate::types::FieldMap;
use std::fmt;

pub const PROTO_WIDTH: usize = 4;
pub const IFACE_WIDTH: usize = 5;
pub const ENDPOINT_WIDTH: usize = 21;

/// Display adapter that renders a [`FieldMap`] as one summary line (without
/// the trailing newline).
pub struct Summary<'a>(pub &'a FieldMap);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.0;
        write!(
            f,
            "{} | proto={:<pw$} in={:<iw$} out={:<iw$} src={:<ew$} dest={:<ew$}",
            fields.timestamp(),
            fields.get_or_empty("proto"),
            fields.get_or_empty("in"),
            fields.get_or_empty("out"),
            fields.source(),
            fields.destination(),
            pw = PROTO_WIDTH,
            iw = IFACE_WIDTH,
            ew = ENDPOINT_WIDTH,
        )
    }
}

pub fn format_line(fields: &FieldMap) -> String {
    Summary(fields).to_string()
}
