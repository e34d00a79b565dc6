pub const SEARCH: &str = "\u{f002}";
pub const ACCOUNT: &str = "\u{f007}";
pub const CART: &str = "\u{f07a}";
pub const CHEVRON_DOWN: &str = "\u{f078}";
