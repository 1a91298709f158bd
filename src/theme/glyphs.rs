pub const LOGO: &str = "\u{f522}";
pub const LOCK: &str = "\u{f023}";
pub const PLUS: &str = "+";
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const EXPANDED: &str = "\u{25be}";
pub const COLLAPSED: &str = "\u{25b8}";
pub const ARROW: &str = "\u{2192}";
