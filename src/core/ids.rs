pub type PersonId = u32;
pub type WorkId = u32;

const PREFIX_LEN: usize = 2;

/// Strips the two-character namespace prefix (`nm`, `tt`, ...) and parses the digits that follow.
pub fn parse_prefixed(raw: &str) -> Option<u32> {
    let (start, _) = raw.char_indices().nth(PREFIX_LEN)?;
    raw[start..].parse::<u32>().ok()
}

pub fn parse_prefixed_bytes(raw: &[u8]) -> Option<u32> {
    std::str::from_utf8(raw).ok().and_then(parse_prefixed)
}
