use regex::Regex;

use crate::config::WordingPolicy;
use crate::version::BumpClass;

/// Result of classifying a commit batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No trigger wording matched and no usable default was configured
    None,
    /// The configured default names a bump class this tool does not implement;
    /// carries the raw value for the operator warning
    Unsupported(String),
    /// A supported bump class, with the pre-release identifier when the class
    /// is `Prerelease`
    Class(BumpClass, Option<String>),
}

/// Classify a commit batch into a bump class.
///
/// The waterfall checks classes in strict precedence order and stops at the
/// first match: major (breaking-change marker or major wording), minor,
/// patch (only when a patch wording set is configured), pre-release (only
/// when a pre-release wording set is configured). When nothing matches, the
/// externally-configured default class applies.
///
/// Wording checks are case-sensitive literal containment. The breaking-change
/// marker is a fixed pattern (`type(scope)!:` at the start of the message)
/// checked independently of any wording list.
pub fn classify(
    messages: &[String],
    wording: &WordingPolicy,
    default_class: Option<&str>,
    explicit_preid: Option<&str>,
) -> Classification {
    let breaking = Regex::new(r"^[a-zA-Z]+(\(.+\))?!:").ok();
    let is_breaking =
        |m: &str| breaking.as_ref().map(|re| re.is_match(m)).unwrap_or(false);

    let mut found_word: Option<&str> = None;

    let mut class = if messages
        .iter()
        .any(|m| is_breaking(m) || contains_any(m, &wording.major))
    {
        Some(BumpClass::Major)
    } else if messages.iter().any(|m| contains_any(m, &wording.minor)) {
        Some(BumpClass::Minor)
    } else if wording
        .patch
        .as_ref()
        .is_some_and(|words| messages.iter().any(|m| contains_any(m, words)))
    {
        Some(BumpClass::Patch)
    } else if let Some(word) = wording
        .prerelease
        .as_ref()
        .and_then(|words| first_match(messages, words))
    {
        found_word = Some(word);
        Some(BumpClass::Prerelease)
    } else {
        None
    };

    if class.is_none() {
        class = match default_class {
            Some(raw) => match raw.parse::<BumpClass>() {
                Ok(default) => Some(default),
                Err(_) => return Classification::Unsupported(raw.to_string()),
            },
            None => None,
        };
    }

    // A default of `prerelease` reaches here without any wording match; when
    // a pre-release wording set is configured but matched nothing, drop the
    // classification and do not run.
    if class == Some(BumpClass::Prerelease) {
        if let Some(words) = &wording.prerelease {
            if !messages.iter().any(|m| contains_any(m, words)) {
                class = None;
            }
        }
    }

    match class {
        None => Classification::None,
        Some(BumpClass::Prerelease) => {
            // An explicitly configured identifier wins over the suffix of the
            // matched trigger word ("rc-next" -> "next")
            let preid = explicit_preid
                .map(String::from)
                .or_else(|| found_word.and_then(|w| w.split('-').nth(1).map(String::from)));
            Classification::Class(BumpClass::Prerelease, preid)
        }
        Some(class) => Classification::Class(class, None),
    }
}

fn contains_any(message: &str, words: &[String]) -> bool {
    words.iter().any(|word| message.contains(word.as_str()))
}

/// First pre-release trigger word found anywhere in the batch, message order
fn first_match<'a>(messages: &[String], words: &'a [String]) -> Option<&'a str> {
    for message in messages {
        for word in words {
            if message.contains(word.as_str()) {
                return Some(word.as_str());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn wording() -> WordingPolicy {
        WordingPolicy {
            major: vec!["MAJOR".to_string()],
            minor: vec!["feat".to_string()],
            patch: Some(vec!["fix".to_string()]),
            prerelease: Some(vec!["rc-next".to_string(), "pre-alpha".to_string()]),
        }
    }

    #[test]
    fn test_major_wording() {
        let c = classify(&msgs(&["MAJOR: drop legacy api"]), &wording(), None, None);
        assert_eq!(c, Classification::Class(BumpClass::Major, None));
    }

    #[test]
    fn test_breaking_marker_is_major_without_wording() {
        // The marker check does not depend on any configured wording
        let empty = WordingPolicy {
            major: vec![],
            minor: vec![],
            patch: None,
            prerelease: None,
        };
        let c = classify(&msgs(&["feat(api)!: remove endpoint"]), &empty, None, None);
        assert_eq!(c, Classification::Class(BumpClass::Major, None));
    }

    #[test]
    fn test_breaking_marker_without_scope() {
        let c = classify(&msgs(&["refactor!: new config layout"]), &wording(), None, None);
        assert_eq!(c, Classification::Class(BumpClass::Major, None));
    }

    #[test]
    fn test_marker_must_lead_the_message() {
        let c = classify(
            &msgs(&["docs: mention that feat(api)!: is special"]),
            &WordingPolicy {
                major: vec![],
                minor: vec![],
                patch: None,
                prerelease: None,
            },
            None,
            None,
        );
        assert_eq!(c, Classification::None);
    }

    #[test]
    fn test_major_wins_over_minor() {
        let c = classify(
            &msgs(&["feat: add widget", "MAJOR: rewrite storage"]),
            &wording(),
            None,
            None,
        );
        assert_eq!(c, Classification::Class(BumpClass::Major, None));
    }

    #[test]
    fn test_minor_wording() {
        let c = classify(&msgs(&["feat: add widget"]), &wording(), None, None);
        assert_eq!(c, Classification::Class(BumpClass::Minor, None));
    }

    #[test]
    fn test_wording_is_case_sensitive() {
        let c = classify(&msgs(&["major: lowercase word"]), &wording(), None, None);
        assert_eq!(c, Classification::None);
    }

    #[test]
    fn test_patch_wording_when_configured() {
        let c = classify(&msgs(&["fix: off-by-one"]), &wording(), None, None);
        assert_eq!(c, Classification::Class(BumpClass::Patch, None));
    }

    #[test]
    fn test_patch_unreachable_when_unconfigured() {
        let mut w = wording();
        w.patch = None;
        let c = classify(&msgs(&["fix: off-by-one"]), &w, None, None);
        assert_eq!(c, Classification::None);
    }

    #[test]
    fn test_prerelease_extracts_identifier() {
        let c = classify(&msgs(&["chore: rc-next rollout"]), &wording(), None, None);
        assert_eq!(
            c,
            Classification::Class(BumpClass::Prerelease, Some("next".to_string()))
        );
    }

    #[test]
    fn test_prerelease_explicit_preid_wins() {
        let c = classify(
            &msgs(&["chore: rc-next rollout"]),
            &wording(),
            None,
            Some("beta"),
        );
        assert_eq!(
            c,
            Classification::Class(BumpClass::Prerelease, Some("beta".to_string()))
        );
    }

    #[test]
    fn test_prerelease_word_without_suffix_has_no_identifier() {
        let mut w = wording();
        w.prerelease = Some(vec!["experimental".to_string()]);
        let c = classify(&msgs(&["experimental build"]), &w, None, None);
        assert_eq!(c, Classification::Class(BumpClass::Prerelease, None));
    }

    #[test]
    fn test_empty_batch_no_default() {
        let c = classify(&[], &wording(), None, None);
        assert_eq!(c, Classification::None);
    }

    #[test]
    fn test_empty_batch_with_default() {
        let c = classify(&[], &wording(), Some("minor"), None);
        assert_eq!(c, Classification::Class(BumpClass::Minor, None));
    }

    #[test]
    fn test_match_overrides_default() {
        let c = classify(&msgs(&["feat: add widget"]), &wording(), Some("patch"), None);
        assert_eq!(c, Classification::Class(BumpClass::Minor, None));
    }

    #[test]
    fn test_unsupported_default() {
        let c = classify(&msgs(&["docs: readme"]), &wording(), Some("hotfix"), None);
        assert_eq!(c, Classification::Unsupported("hotfix".to_string()));
    }

    #[test]
    fn test_default_prerelease_downgrades_when_wording_unmatched() {
        // rc wording configured, nothing matched, default says prerelease:
        // the re-check drops it
        let c = classify(&msgs(&["docs: readme"]), &wording(), Some("prerelease"), None);
        assert_eq!(c, Classification::None);
    }

    #[test]
    fn test_default_prerelease_survives_without_wording_set() {
        let mut w = wording();
        w.prerelease = None;
        let c = classify(&msgs(&["docs: readme"]), &w, Some("prerelease"), Some("beta"));
        assert_eq!(
            c,
            Classification::Class(BumpClass::Prerelease, Some("beta".to_string()))
        );
    }

    #[test]
    fn test_matches_in_body_count() {
        // Batch entries are message + body concatenated
        let c = classify(
            &msgs(&["chore: bump deps\n\nincludes feat flag work"]),
            &wording(),
            None,
            None,
        );
        assert_eq!(c, Classification::Class(BumpClass::Minor, None));
    }
}
