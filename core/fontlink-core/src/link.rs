//! Family serialization, scheme selection, and tag assembly

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::args::{FontArg, FontName, Weight};

/// Host serving the webfonts stylesheets.
pub const FONTS_HOST: &str = "fonts.googleapis.com";

/// The `<link>` description: fixed `rel`/`type` attributes plus the
/// computed stylesheet URL. Escaping for any particular markup context
/// is the template layer's business, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub href: String,
}

impl LinkTag {
    /// Render the tag as markup.
    pub fn html(&self) -> String {
        format!(
            "<link href=\"{}\" rel=\"{}\" type=\"{}\" />",
            self.href, self.rel, self.mime
        )
    }
}

/// Build the webfonts `<link>` description.
///
/// Font tokens keep input order and are joined with `|`. The first
/// mapping argument carrying a subset directive wins; later directives
/// are ignored. The scheme follows the caller's secure-transport flag.
pub fn build(args: &[FontArg], secure: bool) -> Result<LinkTag> {
    if args.is_empty() {
        bail!("expected at least one font");
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut subset: Option<String> = None;

    for arg in args {
        match arg {
            FontArg::Name(name) => tokens.push(name.plain_token()),
            FontArg::Map(map) => {
                if subset.is_none() {
                    if let Some(values) = &map.subset {
                        subset = Some(format!("&subset={}", values.join(",")));
                    }
                }
                tokens.extend(
                    map.entries
                        .iter()
                        .map(|(name, weights)| font_token(name, weights)),
                );
            }
        }
    }

    let family = tokens.join("|");
    let scheme = if secure { "https" } else { "http" };
    let fragment = subset.unwrap_or_default();

    Ok(LinkTag {
        rel: "stylesheet".to_string(),
        mime: "text/css".to_string(),
        href: format!("{scheme}://{FONTS_HOST}/css?family={family}{fragment}"),
    })
}

/// Dynamic front door: validate loose JSON arguments, then build.
pub fn build_from_values(values: &[Value], secure: bool) -> Result<LinkTag> {
    let args = values
        .iter()
        .map(FontArg::from_value)
        .collect::<Result<Vec<_>>>()?;
    build(&args, secure)
}

fn font_token(name: &FontName, weights: &[Weight]) -> String {
    let key = name.map_token();
    if weights.is_empty() {
        return key;
    }

    let joined = weights
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{key}:{joined}")
}
