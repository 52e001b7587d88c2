//! Utility class-name composition.
//!
//! Class lists are merged left to right. Two classes conflict when they
//! target the same CSS property (e.g. `flex-row` and `flex-col`); the later
//! class wins and keeps its later position. Caller-supplied classes are
//! always merged last, so they can override any generated default without
//! fighting selector specificity.

/// Compose class lists into a final class string.
///
/// Each input may contain several whitespace-separated classes. Exact
/// duplicates collapse; conflicting utilities resolve to the later one.
///
/// ## Example
///
/// ```rust
/// use marquee_view::compose;
///
/// let merged = compose(&["flex flex-row gap-marquee", "flex-col"]);
/// assert_eq!(merged, "flex gap-marquee flex-col");
/// ```
pub fn compose(parts: &[&str]) -> String {
    let mut ordered: Vec<(String, &str)> = Vec::new();

    for part in parts {
        for class in part.split_whitespace() {
            let group = conflict_group(class);
            ordered.retain(|(existing, _)| *existing != group);
            ordered.push((group, class));
        }
    }

    let classes: Vec<&str> = ordered.iter().map(|(_, class)| *class).collect();
    classes.join(" ")
}

/// Conflict group key for a single class.
///
/// Classes in the same group target the same CSS property. Unknown classes
/// form their own group, so only exact duplicates collapse. Variant-prefixed
/// classes (`hover:flex-row`) group within their variant.
fn conflict_group(class: &str) -> String {
    let (variant, base) = split_variant(class);
    let group = base_group(base);
    if variant.is_empty() {
        group.to_string()
    } else {
        format!("{}:{}", variant, group)
    }
}

/// Split a class into its variant prefix and base utility.
///
/// The variant ends at the last colon outside square brackets, so arbitrary
/// values like `gap-[1rem]` keep their inner colons.
fn split_variant(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut last_colon = None;

    for (i, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => last_colon = Some(i),
            _ => {}
        }
    }

    match last_colon {
        Some(i) => (&class[..i], &class[i + 1..]),
        None => ("", class),
    }
}

/// Map a base utility to the CSS property it targets.
fn base_group(base: &str) -> &str {
    match base {
        "flex" | "inline-flex" | "block" | "inline-block" | "inline" | "grid" | "hidden" => {
            "display"
        }
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "shrink" | "shrink-0" => "flex-shrink",
        "grow" | "grow-0" => "flex-grow",
        _ if base.starts_with("gap-") => "gap",
        _ if base.starts_with("overflow-") => "overflow",
        _ if base.starts_with("justify-") => "justify-content",
        _ if base.starts_with("animate-") => "animation",
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_class_wins_conflict() {
        assert_eq!(compose(&["flex-row", "flex-col"]), "flex-col");
        assert_eq!(compose(&["overflow-hidden", "overflow-auto"]), "overflow-auto");
        assert_eq!(
            compose(&["animate-marquee-left", "animate-marquee-up"]),
            "animate-marquee-up"
        );
    }

    #[test]
    fn test_survivor_takes_later_position() {
        assert_eq!(
            compose(&["flex flex-row gap-marquee", "custom flex-col"]),
            "flex gap-marquee custom flex-col"
        );
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        assert_eq!(compose(&["group flex", "flex group"]), "flex group");
    }

    #[test]
    fn test_unknown_classes_pass_through() {
        assert_eq!(
            compose(&["marquee-ticker", "text-lg font-medium"]),
            "marquee-ticker text-lg font-medium"
        );
    }

    #[test]
    fn test_variants_group_separately() {
        // A hover variant does not displace the plain utility.
        assert_eq!(
            compose(&["flex-row", "hover:flex-col"]),
            "flex-row hover:flex-col"
        );
        // Two classes under the same variant still conflict.
        assert_eq!(compose(&["hover:flex-row", "hover:flex-col"]), "hover:flex-col");
    }

    #[test]
    fn test_arbitrary_value_keeps_inner_colon() {
        let (variant, base) = split_variant("gap-[--gap:1rem]");
        assert_eq!(variant, "");
        assert_eq!(base, "gap-[--gap:1rem]");

        let (variant, base) = split_variant("hover:gap-[1rem]");
        assert_eq!(variant, "hover");
        assert_eq!(base, "gap-[1rem]");
    }

    #[test]
    fn test_empty_and_whitespace_inputs_vanish() {
        assert_eq!(compose(&["", "  ", "flex"]), "flex");
        assert_eq!(compose(&[]), "");
    }
}
