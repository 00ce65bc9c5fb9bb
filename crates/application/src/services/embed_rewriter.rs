use fancy_regex::{Match, Regex};
use pardot_embed_domain::config::SiteConfig;
use pardot_embed_domain::{EntityKind, RewriteOptions};
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Base class every rewritten form frame carries alongside user classes.
pub const FORM_BASE_CLASS: &str = "pardotform";

/// Class token dynamic-content snippets carry in their wrapper's class list.
pub const DYNAMIC_CONTENT_MARKER: &str = "pardotdc";

static EMBED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?|ftps?)://[a-zA-Z0-9\-.]+\.[a-zA-Z]{2,3}(/[^\s"'<>?#]*)?"#)
        .expect("embed url pattern compiles")
});

static FRAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<iframe\b").expect("frame tag pattern compiles"));

static HEIGHT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?<![\w-])height="[^"]+""#).expect("height attribute pattern compiles")
});

static WIDTH_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?<![\w-])width="[^"]+""#).expect("width attribute pattern compiles")
});

/// Applies per-use display overrides and the site HTTPS policy to embed
/// snippets.
///
/// Every step is a best-effort string edit: when the text a step looks for
/// is missing, that step leaves the snippet as it is.
#[derive(Debug, Clone)]
pub struct EmbedRewriter {
    force_https: bool,
    secure_host: Arc<str>,
}

impl EmbedRewriter {
    pub fn new(force_https: bool, secure_host: impl Into<Arc<str>>) -> Self {
        Self {
            force_https,
            secure_host: secure_host.into(),
        }
    }

    pub fn from_site_config(site: &SiteConfig) -> Self {
        Self::new(site.force_https, site.secure_host.as_str())
    }

    /// Rewrites `snippet` in fixed order: secure URL, height, width, classes.
    pub fn apply(&self, snippet: &str, options: &RewriteOptions, kind: EntityKind) -> String {
        let mut out = if self.force_https {
            force_secure_url(snippet, &self.secure_host)
        } else {
            snippet.to_string()
        };

        match kind {
            EntityKind::Form => {
                if let Some(height) = &options.height {
                    out = set_or_inject_attribute(&out, &HEIGHT_ATTR, "height", height);
                }
                if let Some(width) = &options.width {
                    out = set_or_inject_attribute(&out, &WIDTH_ATTR, "width", width);
                }
                if let Some(classes) = &options.classes {
                    let attribute = format!(r#"class="{FORM_BASE_CLASS} {classes}""#);
                    out = inject_after_frame_tag(&out, &attribute);
                }
            }
            EntityKind::DynamicContent => {
                if let Some(height) = &options.height {
                    out = replace_style_token(&out, "height", height);
                }
                if let Some(width) = &options.width {
                    out = replace_style_token(&out, "width", width);
                }
                if let Some(classes) = &options.classes {
                    out = append_after_marker(&out, DYNAMIC_CONTENT_MARKER, classes);
                }
            }
        }

        out
    }

    /// Like [`apply`](Self::apply) but selects the rules by type name.
    /// Unrecognised names leave the snippet untouched.
    pub fn apply_for_type(&self, snippet: &str, options: &RewriteOptions, type_name: &str) -> String {
        match type_name.parse::<EntityKind>() {
            Ok(kind) => self.apply(snippet, options, kind),
            Err(_) => {
                debug!(type_name, "Unknown embed type, snippet left unchanged");
                snippet.to_string()
            }
        }
    }
}

fn first_match<'t>(pattern: &Regex, text: &'t str) -> Option<Match<'t>> {
    pattern.find(text).ok().flatten()
}

/// Moves the first URL in `snippet` onto `secure_host`, keeping its path.
///
/// Every literal occurrence of the matched URL text is replaced, not only
/// the first.
pub fn force_secure_url(snippet: &str, secure_host: &str) -> String {
    let Some(captures) = EMBED_URL.captures(snippet).ok().flatten() else {
        return snippet.to_string();
    };
    let Some(url) = captures.get(0) else {
        return snippet.to_string();
    };

    let path = captures.get(1).map_or("", |m| m.as_str());
    let secure_url = format!("{}{}", secure_host.trim_end_matches('/'), path);
    snippet.replace(url.as_str(), &secure_url)
}

/// Overwrites an existing `attribute="..."` (all literal copies of the first
/// one found), or adds the attribute right after the first frame tag name.
pub fn set_or_inject_attribute(
    snippet: &str,
    pattern: &Regex,
    attribute: &str,
    value: &str,
) -> String {
    let replacement = format!(r#"{attribute}="{value}""#);
    match first_match(pattern, snippet) {
        Some(existing) => snippet.replace(existing.as_str(), &replacement),
        None => inject_after_frame_tag(snippet, &replacement),
    }
}

/// Inserts `attribute_text` after the first `<iframe` tag name.
pub fn inject_after_frame_tag(snippet: &str, attribute_text: &str) -> String {
    let Some(tag) = first_match(&FRAME_TAG, snippet) else {
        return snippet.to_string();
    };

    let mut out = String::with_capacity(snippet.len() + attribute_text.len() + 1);
    out.push_str(&snippet[..tag.end()]);
    out.push(' ');
    out.push_str(attribute_text);
    out.push_str(&snippet[tag.end()..]);
    out
}

/// Replaces the literal `property:auto` style token with `property:value`.
pub fn replace_style_token(snippet: &str, property: &str, value: &str) -> String {
    snippet.replace(&format!("{property}:auto"), &format!("{property}:{value}"))
}

/// Appends `classes` after every occurrence of `marker`.
pub fn append_after_marker(snippet: &str, marker: &str, classes: &str) -> String {
    snippet.replace(marker, &format!("{marker} {classes}"))
}
