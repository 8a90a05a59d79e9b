//! CSS named colors accepted by the parser.
//!
//! The CSS Level 1 basic keywords plus a handful of common extended ones.

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("white", [0xff, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("red", [0xff, 0x00, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("green", [0x00, 0x80, 0x00]),
    ("lime", [0x00, 0xff, 0x00]),
    ("olive", [0x80, 0x80, 0x00]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("blue", [0x00, 0x00, 0xff]),
    ("teal", [0x00, 0x80, 0x80]),
    ("aqua", [0x00, 0xff, 0xff]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("rebeccapurple", [0x66, 0x33, 0x99]),
    ("darkgray", [0xa9, 0xa9, 0xa9]),
    ("lightgray", [0xd3, 0xd3, 0xd3]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("tomato", [0xff, 0x63, 0x47]),
    ("slategray", [0x70, 0x80, 0x90]),
    ("steelblue", [0x46, 0x82, 0xb4]),
];

/// Look up a CSS color keyword (case-insensitive).
pub(crate) fn lookup(name: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}
