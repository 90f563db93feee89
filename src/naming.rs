//! Set-name decomposition: set index vs ability suffix.
//!
//! Catalog names follow `Unit-<set>` or `Unit-<set>-<Ability>`. The final
//! hyphen segment is an ability only when it is not purely numeric; that
//! numeric check is the sole disambiguator between a set index and an
//! ability name, so it runs first.

/// A set name split into its ability-stripped base and optional ability tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSetName {
    pub base_name: String,
    pub ability: Option<String>,
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Split a raw set name into base name and optional ability.
/// `"Aero-1"` has no ability; `"Aero-1-RockHead"` has ability `RockHead`.
pub fn parse_set_name(raw: &str) -> ParsedSetName {
    let segments: Vec<&str> = raw.split('-').collect();
    // split always yields at least one segment
    let last = segments[segments.len() - 1];
    if is_numeric(last) {
        ParsedSetName {
            base_name: raw.to_string(),
            ability: None,
        }
    } else {
        ParsedSetName {
            base_name: segments[..segments.len() - 1].join("-"),
            ability: Some(last.to_string()),
        }
    }
}

/// Strip an ability suffix while keeping the unit + set index pair,
/// e.g. `"Aero-1-RockHead"` -> `"Aero-1"`. Names that do not match the
/// `Unit-<set>[-Ability]` shape come back unchanged.
pub fn unit_variant(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('-').collect();
    if segments.len() >= 3 && is_numeric(segments[1]) {
        segments[..2].join("-")
    } else {
        raw.to_string()
    }
}

/// Unit identity with both the set index and any ability stripped.
/// Two sets with the same unit base are the same piece and may not share a
/// team, whatever their set index or ability.
pub fn unit_base(raw: &str) -> String {
    let parsed = parse_set_name(raw);
    let segments: Vec<&str> = parsed.base_name.split('-').collect();
    if segments.len() > 1 {
        segments[..segments.len() - 1].join("-")
    } else {
        parsed.base_name
    }
}
