//! Medium post to Markdown transformations
//!
//! Medium serves post content through a GraphQL endpoint. The shell posts the
//! query built here, and the response is decoded into [`MediumPostResponse`],
//! reduced to a [`Post`] made of typed paragraphs and finally rendered as
//! Markdown. Nothing in this module performs I/O.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MEDIUM_GRAPHQL_URL: &str = "https://medium.com/_/graphql";
pub const DEFAULT_MEDIUM_TIMEOUT_SECS: u64 = 10;
pub const MEDIUM_IMAGE_BASE_URL: &str = "https://miro.medium.com/max/1400";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MediumError {
    #[error("Failed to parse Medium response: {0}")]
    InvalidResponse(String),

    #[error("post {0} not found")]
    PostNotFound(String),
}

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediumQuery {
    pub query: String,
}

// ============================================================================
// GraphQL response model
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumPostResponse {
    pub data: Option<MediumData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumData {
    pub post: Option<MediumPost>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumPost {
    pub title: Option<String>,
    pub creator: Option<MediumCreator>,
    pub content: Option<MediumContent>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumCreator {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumContent {
    pub body_model: Option<MediumBodyModel>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumBodyModel {
    pub paragraphs: Option<Vec<MediumParagraph>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediumParagraph {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub paragraph_type: Option<String>,
    pub href: Option<String>,
    pub layout: Option<String>,
    pub markups: Option<Vec<MediumMarkup>>,
    pub metadata: Option<MediumParagraphMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumMarkup {
    #[serde(rename = "type")]
    pub markup_type: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub user_id: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub anchor_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumParagraphMetadata {
    pub id: Option<String>,
    pub original_width: Option<u32>,
    pub original_height: Option<u32>,
}

// ============================================================================
// Domain model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    Heading,
    Subheading,
    Text,
    Image,
    Code,
    Quote,
    BulletItem,
    NumberedItem,
    Other(String),
}

impl ParagraphKind {
    /// Map Medium's paragraph type codes
    pub fn from_medium(code: &str) -> Self {
        match code {
            "H3" => ParagraphKind::Heading,
            "H4" => ParagraphKind::Subheading,
            "P" => ParagraphKind::Text,
            "IMG" => ParagraphKind::Image,
            "PRE" => ParagraphKind::Code,
            "BQ" | "PQ" => ParagraphKind::Quote,
            "ULI" => ParagraphKind::BulletItem,
            "OLI" => ParagraphKind::NumberedItem,
            other => ParagraphKind::Other(other.to_string()),
        }
    }
}

/// Anchor over a character range of a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub start: usize,
    pub end: usize,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub text: String,
    pub links: Vec<Link>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub paragraphs: Vec<Paragraph>,
}

/// Command output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumOutput {
    pub markdown: String,
    pub post_id: String,
}

// ============================================================================
// Transformations
// ============================================================================

/// Extract the post identifier from a Medium URL
///
/// Plain identifiers are returned unchanged. From
/// `https://medium.com/@user/some-title-4b63ff0e2bd3?source=...` the result is
/// `4b63ff0e2bd3`.
pub fn sanitize_post_id(input: &str) -> String {
    let input = input.trim();
    if !input.contains("https") {
        return input.to_string();
    }

    let without_query = input.split(['?', '#']).next().unwrap_or(input);
    let last_segment = without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(without_query);

    last_segment
        .rsplit('-')
        .next()
        .unwrap_or(last_segment)
        .to_string()
}

/// Build the GraphQL query for a post
pub fn build_post_query(post_id: &str) -> MediumQuery {
    let query = format!(
        r#"query {{
  post(id: "{post_id}") {{
    title
    createdAt
    creator {{
      id
      name
    }}
    content {{
      bodyModel {{
        paragraphs {{
          text
          type
          href
          layout
          markups {{
            title
            type
            href
            userId
            start
            end
            anchorType
          }}
          iframe {{
            mediaResource {{
              href
              iframeSrc
              iframeWidth
              iframeHeight
            }}
          }}
          metadata {{
            id
            originalWidth
            originalHeight
          }}
        }}
      }}
    }}
  }}
}}"#
    );

    MediumQuery { query }
}

/// Decode a raw GraphQL response body
pub fn parse_post_response(body: &str) -> Result<MediumPostResponse, MediumError> {
    serde_json::from_str(body).map_err(|e| MediumError::InvalidResponse(e.to_string()))
}

/// Reduce the GraphQL response to a post with typed paragraphs
pub fn extract_post(post_id: &str, response: MediumPostResponse) -> Result<Post, MediumError> {
    let post = response
        .data
        .and_then(|data| data.post)
        .ok_or_else(|| MediumError::PostNotFound(post_id.to_string()))?;

    let paragraphs = post
        .content
        .and_then(|content| content.body_model)
        .and_then(|body| body.paragraphs)
        .unwrap_or_default()
        .into_iter()
        .map(transform_paragraph)
        .collect();

    Ok(Post {
        id: post_id.to_string(),
        title: post.title.unwrap_or_default(),
        author: post.creator.and_then(|c| c.name).unwrap_or_default(),
        paragraphs,
    })
}

fn transform_paragraph(paragraph: MediumParagraph) -> Paragraph {
    let links = paragraph
        .markups
        .unwrap_or_default()
        .into_iter()
        .filter(|markup| markup.markup_type.as_deref() == Some("A"))
        .filter_map(|markup| {
            Some(Link {
                start: markup.start?,
                end: markup.end?,
                href: markup.href?,
            })
        })
        .collect();

    Paragraph {
        kind: ParagraphKind::from_medium(paragraph.paragraph_type.as_deref().unwrap_or("")),
        text: paragraph.text.unwrap_or_default(),
        links,
        image_id: paragraph.metadata.and_then(|m| m.id),
    }
}

/// Render anchors inline as `[text](href)`
///
/// Offsets count characters. Out-of-range offsets are clamped to the text and
/// empty or overlapping ranges are left as plain text.
pub fn apply_links(text: &str, links: &[Link]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut sorted: Vec<&Link> = links.iter().collect();
    sorted.sort_by_key(|link| link.start);

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for link in sorted {
        let start = link.start.min(chars.len());
        let end = link.end.min(chars.len());
        if start < cursor || start >= end {
            continue;
        }

        result.extend(&chars[cursor..start]);
        let anchor: String = chars[start..end].iter().collect();
        result.push_str(&format!("[{}]({})", anchor, link.href));
        cursor = end;
    }

    result.extend(&chars[cursor..]);
    result
}

pub fn image_url(image_id: &str) -> String {
    format!("{MEDIUM_IMAGE_BASE_URL}/{image_id}")
}

fn render_paragraph(paragraph: &Paragraph) -> Option<String> {
    let text = apply_links(&paragraph.text, &paragraph.links);

    let rendered = match &paragraph.kind {
        ParagraphKind::Heading => format!("## {text}"),
        ParagraphKind::Subheading => format!("### _{text}_"),
        ParagraphKind::Text => text,
        ParagraphKind::Image => {
            let image_id = paragraph.image_id.as_deref()?;
            format!("![{}]({})", paragraph.text, image_url(image_id))
        }
        // Links are not rendered inside code
        ParagraphKind::Code => format!("```\n{}\n```", paragraph.text),
        ParagraphKind::Quote => format!("> {text}"),
        ParagraphKind::BulletItem => format!("- {text}"),
        ParagraphKind::NumberedItem => format!("1. {text}"),
        ParagraphKind::Other(_) => return None,
    };

    Some(rendered)
}

/// Render a post as Markdown
pub fn render_markdown(post: &Post) -> String {
    let mut markdown = format!("# {}\n", post.title);
    markdown.push_str(&format!("By {}\n", post.author));

    for rendered in post.paragraphs.iter().filter_map(render_paragraph) {
        markdown.push('\n');
        markdown.push_str(&rendered);
        markdown.push('\n');
    }

    markdown
}

/// Decode, reduce and render a raw response body in one step
pub fn convert_post_response(post_id: &str, body: &str) -> Result<MediumOutput, MediumError> {
    let response = parse_post_response(body)?;
    let post = extract_post(post_id, response)?;

    Ok(MediumOutput {
        markdown: render_markdown(&post),
        post_id: post_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
      "data": {
        "post": {
          "title": "Setting up a new computer",
          "createdAt": 1638752765617,
          "creator": { "id": "abc", "name": "Jane Doe" },
          "content": {
            "bodyModel": {
              "paragraphs": [
                { "text": "Tools", "type": "H3", "href": null, "layout": null, "markups": [], "iframe": null, "metadata": null },
                { "text": "Read the docs first.", "type": "P", "href": null, "layout": null,
                  "markups": [ { "title": "", "type": "A", "href": "https://docs.rs", "userId": null, "start": 9, "end": 13, "anchorType": "LINK" } ],
                  "iframe": null, "metadata": null },
                { "text": "A screenshot", "type": "IMG", "href": null, "layout": "INSET_CENTER", "markups": [], "iframe": null,
                  "metadata": { "id": "1*abc.png", "originalWidth": 800, "originalHeight": 600 } },
                { "text": "brew install git", "type": "PRE", "href": null, "layout": null, "markups": [], "iframe": null, "metadata": null },
                { "text": "embedded", "type": "IFRAME", "href": null, "layout": null, "markups": null, "iframe": null, "metadata": null }
              ]
            }
          }
        }
      }
    }"#;

    fn create_test_paragraph(kind: ParagraphKind, text: &str) -> Paragraph {
        Paragraph {
            kind,
            text: text.to_string(),
            links: vec![],
            image_id: None,
        }
    }

    fn create_test_post(paragraphs: Vec<Paragraph>) -> Post {
        Post {
            id: "4b63ff0e2bd3".to_string(),
            title: "Title".to_string(),
            author: "Author".to_string(),
            paragraphs,
        }
    }

    // ============================================================================
    // sanitize_post_id tests
    // ============================================================================

    #[test]
    fn test_sanitize_post_id_plain_id() {
        assert_eq!(sanitize_post_id("4b63ff0e2bd3"), "4b63ff0e2bd3");
    }

    #[test]
    fn test_sanitize_post_id_full_url_with_query() {
        let url = "https://medium.com/@bradleyalanlaplante/heres-everything-i-do-when-setting-up-a-new-computer-4b63ff0e2bd3?source=email-bea602c1f3c7-1638752765617-digest.reader--4b63ff0e2bd3----1-72------------------462baf81_c223_437a_8412_a2811df1b2fe-28-";
        assert_eq!(sanitize_post_id(url), "4b63ff0e2bd3");
    }

    #[test]
    fn test_sanitize_post_id_trailing_slash() {
        assert_eq!(
            sanitize_post_id("https://medium.com/@user/some-title-f744fbff033e/"),
            "f744fbff033e"
        );
    }

    #[test]
    fn test_sanitize_post_id_short_link() {
        assert_eq!(
            sanitize_post_id("https://medium.com/p/f744fbff033e"),
            "f744fbff033e"
        );
    }

    #[test]
    fn test_sanitize_post_id_trims_whitespace() {
        assert_eq!(sanitize_post_id("  4b63ff0e2bd3\n"), "4b63ff0e2bd3");
    }

    // ============================================================================
    // query and parsing tests
    // ============================================================================

    #[test]
    fn test_build_post_query_embeds_id() {
        let query = build_post_query("4b63ff0e2bd3");
        assert!(query.query.contains(r#"post(id: "4b63ff0e2bd3")"#));
        assert!(query.query.contains("paragraphs"));

        let json = serde_json::to_string(&query).unwrap();
        assert!(json.starts_with(r#"{"query":"#));
    }

    #[test]
    fn test_parse_post_response_invalid_json() {
        let result = parse_post_response("<html>blocked</html>");
        let err = result.unwrap_err();
        assert!(matches!(err, MediumError::InvalidResponse(_)));
        assert!(err.to_string().starts_with("Failed to parse Medium response"));
    }

    #[test]
    fn test_extract_post_from_fixture() {
        let response = parse_post_response(FIXTURE).unwrap();
        let post = extract_post("4b63ff0e2bd3", response).unwrap();

        assert_eq!(post.title, "Setting up a new computer");
        assert_eq!(post.author, "Jane Doe");
        assert_eq!(post.paragraphs.len(), 5);
        assert_eq!(post.paragraphs[0].kind, ParagraphKind::Heading);
        assert_eq!(
            post.paragraphs[1].links,
            vec![Link {
                start: 9,
                end: 13,
                href: "https://docs.rs".to_string()
            }]
        );
        assert_eq!(post.paragraphs[2].image_id.as_deref(), Some("1*abc.png"));
        assert_eq!(
            post.paragraphs[4].kind,
            ParagraphKind::Other("IFRAME".to_string())
        );
    }

    #[test]
    fn test_extract_post_missing_post() {
        let response = parse_post_response(r#"{"data": {"post": null}}"#).unwrap();
        let result = extract_post("deadbeef", response);
        let err = result.unwrap_err();
        assert_eq!(err, MediumError::PostNotFound("deadbeef".to_string()));
        assert_eq!(err.to_string(), "post deadbeef not found");
    }

    #[test]
    fn test_extract_post_without_content() {
        let response =
            parse_post_response(r#"{"data": {"post": {"title": "Empty", "creator": null, "content": null}}}"#)
                .unwrap();
        let post = extract_post("x", response).unwrap();

        assert_eq!(post.title, "Empty");
        assert_eq!(post.author, "");
        assert!(post.paragraphs.is_empty());
    }

    #[test]
    fn test_extract_post_ignores_non_anchor_markups() {
        let body = r#"{"data": {"post": {"title": "T", "content": {"bodyModel": {"paragraphs": [
            {"text": "bold text", "type": "P", "markups": [{"type": "STRONG", "start": 0, "end": 4}]}
        ]}}}}}"#;
        let post = extract_post("x", parse_post_response(body).unwrap()).unwrap();
        assert!(post.paragraphs[0].links.is_empty());
    }

    // ============================================================================
    // apply_links tests
    // ============================================================================

    #[test]
    fn test_apply_links_inline() {
        let links = vec![Link {
            start: 9,
            end: 13,
            href: "https://docs.rs".to_string(),
        }];
        assert_eq!(
            apply_links("Read the docs first.", &links),
            "Read the [docs](https://docs.rs) first."
        );
    }

    #[test]
    fn test_apply_links_multiple_unsorted() {
        let links = vec![
            Link {
                start: 6,
                end: 9,
                href: "b".to_string(),
            },
            Link {
                start: 0,
                end: 3,
                href: "a".to_string(),
            },
        ];
        assert_eq!(apply_links("one - two", &links), "[one](a) - [two](b)");
    }

    #[test]
    fn test_apply_links_overlapping_skipped() {
        let links = vec![
            Link {
                start: 0,
                end: 5,
                href: "a".to_string(),
            },
            Link {
                start: 2,
                end: 7,
                href: "b".to_string(),
            },
        ];
        assert_eq!(apply_links("abcdefgh", &links), "[abcde](a)fgh");
    }

    #[test]
    fn test_apply_links_clamps_out_of_range() {
        let links = vec![Link {
            start: 4,
            end: 100,
            href: "a".to_string(),
        }];
        assert_eq!(apply_links("see here", &links), "see [here](a)");
    }

    #[test]
    fn test_apply_links_unicode_offsets() {
        let links = vec![Link {
            start: 6,
            end: 8,
            href: "a".to_string(),
        }];
        assert_eq!(apply_links("Hello 世界!", &links), "Hello [世界](a)!");
    }

    // ============================================================================
    // render_markdown tests
    // ============================================================================

    #[test]
    fn test_render_markdown_header() {
        let markdown = render_markdown(&create_test_post(vec![]));
        assert_eq!(markdown, "# Title\nBy Author\n");
    }

    #[test]
    fn test_render_markdown_paragraph_kinds() {
        let post = create_test_post(vec![
            create_test_paragraph(ParagraphKind::Heading, "Section"),
            create_test_paragraph(ParagraphKind::Subheading, "Detail"),
            create_test_paragraph(ParagraphKind::Text, "Body"),
            create_test_paragraph(ParagraphKind::Quote, "Wise words"),
            create_test_paragraph(ParagraphKind::BulletItem, "item"),
            create_test_paragraph(ParagraphKind::NumberedItem, "step"),
        ]);
        let markdown = render_markdown(&post);

        assert!(markdown.contains("\n## Section\n"));
        assert!(markdown.contains("\n### _Detail_\n"));
        assert!(markdown.contains("\nBody\n"));
        assert!(markdown.contains("\n> Wise words\n"));
        assert!(markdown.contains("\n- item\n"));
        assert!(markdown.contains("\n1. step\n"));
    }

    #[test]
    fn test_render_markdown_image() {
        let mut image = create_test_paragraph(ParagraphKind::Image, "caption");
        image.image_id = Some("1*abc.png".to_string());
        let markdown = render_markdown(&create_test_post(vec![image]));

        assert!(markdown.contains("![caption](https://miro.medium.com/max/1400/1*abc.png)"));
    }

    #[test]
    fn test_render_markdown_image_without_id_skipped() {
        let image = create_test_paragraph(ParagraphKind::Image, "caption");
        let markdown = render_markdown(&create_test_post(vec![image]));
        assert!(!markdown.contains("caption"));
    }

    #[test]
    fn test_render_markdown_code_block() {
        let code = create_test_paragraph(ParagraphKind::Code, "cargo build");
        let markdown = render_markdown(&create_test_post(vec![code]));
        assert!(markdown.contains("\n```\ncargo build\n```\n"));
    }

    #[test]
    fn test_render_markdown_skips_unknown_kinds() {
        let other = create_test_paragraph(ParagraphKind::Other("MIXTAPE_EMBED".to_string()), "x");
        let markdown = render_markdown(&create_test_post(vec![other]));
        assert_eq!(markdown, "# Title\nBy Author\n");
    }

    #[test]
    fn test_convert_post_response_fixture() {
        let output = convert_post_response("4b63ff0e2bd3", FIXTURE).unwrap();

        assert_eq!(output.post_id, "4b63ff0e2bd3");
        assert!(output.markdown.starts_with("# Setting up a new computer\nBy Jane Doe\n"));
        assert!(output.markdown.contains("## Tools"));
        assert!(output.markdown.contains("Read the [docs](https://docs.rs) first."));
        assert!(output.markdown.contains("![A screenshot]("));
        assert!(output.markdown.contains("```\nbrew install git\n```"));
        assert!(!output.markdown.contains("embedded"));

        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"postId\":\"4b63ff0e2bd3\""));
        assert!(json.contains("\"markdown\""));
    }
}
