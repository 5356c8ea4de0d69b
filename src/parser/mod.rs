mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// NBT-annotated texture name:
//   minecraft__<item_type>__{...potion__'minecraft__<potion_type>'}...png
// Example: minecraft__arrow__{potion__'minecraft__healing'}_tipped.png
// Anchored at the start only; whatever follows the first `.png` after the
// closing brace is ignored, as is the rest of the brace payload.
static TEXTURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^minecraft__(.*?)__\{.*?potion__'minecraft__(.*?)'\}.*?\.png").unwrap()
});

/// Cheap pre-filter: only names carrying an NBT payload are worth matching.
pub fn is_candidate(name: &str) -> bool {
    name.contains('{')
}

/// Parse a candidate filename and extract the item and potion types.
pub fn parse_texture_name(name: &str) -> Result<ParsedTexture, ParseError> {
    let captures = TEXTURE_REGEX
        .captures(name)
        .ok_or_else(|| ParseError::UnrecognizedPattern(name.to_string()))?;

    let item_type = captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::UnrecognizedPattern(name.to_string()))?;
    let potion_type = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::UnrecognizedPattern(name.to_string()))?;

    Ok(ParsedTexture {
        item_type,
        potion_type,
        original_name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Candidate Filter Tests ============

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate("minecraft__arrow__{potion__'minecraft__healing'}.png"));
        assert!(is_candidate("{"));
        assert!(!is_candidate("minecraft__arrow__healing.png"));
        assert!(!is_candidate("plain.png"));
    }

    // ============ Pattern Match Tests ============

    #[test]
    fn test_parse_tipped_arrow() {
        let parsed =
            parse_texture_name("minecraft__arrow__{potion__'minecraft__healing'}_tipped.png")
                .unwrap();

        assert_eq!(parsed.item_type, "arrow");
        assert_eq!(parsed.potion_type, "healing");
        assert_eq!(
            parsed.original_name,
            "minecraft__arrow__{potion__'minecraft__healing'}_tipped.png"
        );
    }

    #[test]
    fn test_parse_splash_potion() {
        let parsed = parse_texture_name(
            "minecraft__splash_potion__{potion__'minecraft__strong_swiftness'}.png",
        )
        .unwrap();

        assert_eq!(parsed.item_type, "splash_potion");
        assert_eq!(parsed.potion_type, "strong_swiftness");
    }

    #[test]
    fn test_parse_ignores_extra_brace_payload() {
        // Payload before the potion reference is discarded; the reference
        // itself must sit directly before the closing brace
        let parsed = parse_texture_name(
            "minecraft__potion__{custom_name__'x', cmd__42, potion__'minecraft__luck'}.png",
        )
        .unwrap();

        assert_eq!(parsed.item_type, "potion");
        assert_eq!(parsed.potion_type, "luck");
    }

    #[test]
    fn test_parse_trailing_payload_after_potion_fails() {
        let result = parse_texture_name(
            "minecraft__potion__{potion__'minecraft__luck', cmd__42}.png",
        );
        assert!(matches!(result, Err(ParseError::UnrecognizedPattern(_))));
    }

    #[test]
    fn test_parse_ignores_text_between_brace_and_extension() {
        let parsed =
            parse_texture_name("minecraft__lingering_potion__{potion__'minecraft__harming'}_v2_final.png")
                .unwrap();

        assert_eq!(parsed.item_type, "lingering_potion");
        assert_eq!(parsed.potion_type, "harming");
    }

    #[test]
    fn test_parse_is_prefix_match() {
        // re.match semantics: trailing text after .png does not break the match
        let parsed =
            parse_texture_name("minecraft__arrow__{potion__'minecraft__poison'}.png.bak").unwrap();

        assert_eq!(parsed.item_type, "arrow");
        assert_eq!(parsed.potion_type, "poison");
    }

    // ============ Mismatch Tests ============

    #[test]
    fn test_parse_garbage_brace_payload_fails() {
        let result = parse_texture_name("minecraft__potion__{garbage}weird.png");
        assert!(matches!(result, Err(ParseError::UnrecognizedPattern(_))));
    }

    #[test]
    fn test_parse_missing_prefix_fails() {
        let result = parse_texture_name("custom__arrow__{potion__'minecraft__healing'}.png");
        assert!(matches!(result, Err(ParseError::UnrecognizedPattern(_))));
    }

    #[test]
    fn test_parse_missing_extension_fails() {
        let result = parse_texture_name("minecraft__arrow__{potion__'minecraft__healing'}");
        assert!(matches!(result, Err(ParseError::UnrecognizedPattern(_))));
    }

    #[test]
    fn test_parse_must_anchor_at_start() {
        let result =
            parse_texture_name("old_minecraft__arrow__{potion__'minecraft__healing'}.png");
        assert!(matches!(result, Err(ParseError::UnrecognizedPattern(_))));
    }
}
