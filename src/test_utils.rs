pub const WELL_FORMED_TERMS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/well_formed.txt"
));

pub const MALFORMED_TERMS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/malformed.txt"
));
