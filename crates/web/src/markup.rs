use std::fmt::Write as _;

use geosearch::{locator::MarkerAttributes, RequestError, RequestResult};
use utility::xml::escape_attribute;

/// How proximity results are rendered. Only xml is supported; anything else
/// configured is a request-fatal configuration error.
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Xml,
    Other(String),
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "xml" => Self::Xml,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Renders marker attribute sets into the response body.
///
/// The xml document shape is fixed: declaration line, a `<markers>` root,
/// one tab-indented self-closing `<marker/>` per result and no trailing
/// newline after the closing tag.
pub fn render_markers(
    format: &OutputFormat,
    markers: &[MarkerAttributes],
) -> RequestResult<String> {
    match format {
        OutputFormat::Xml => {
            let mut body = String::from("<?xml version=\"1.0\"?>\n<markers>\n");
            for marker in markers {
                body.push_str("\t<marker");
                for (name, value) in marker {
                    let _ = write!(
                        body,
                        " {}=\"{}\"",
                        name,
                        escape_attribute(value)
                    );
                }
                body.push_str("/>\n");
            }
            body.push_str("</markers>");
            Ok(body)
        }
        OutputFormat::Other(name) => {
            Err(RequestError::UnsupportedFormat(name.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_markers_bit_exact() {
        let markers = vec![
            MarkerAttributes::from([
                ("name".to_owned(), "Melbourne".to_owned()),
                ("lat".to_owned(), "-37.8136".to_owned()),
                ("lng".to_owned(), "144.9631".to_owned()),
            ]),
            MarkerAttributes::from([
                ("name".to_owned(), "Sydney".to_owned()),
                ("lat".to_owned(), "-33.8688".to_owned()),
                ("lng".to_owned(), "151.2093".to_owned()),
            ]),
        ];
        let body = render_markers(&OutputFormat::Xml, &markers).unwrap();
        assert_eq!(
            body,
            "<?xml version=\"1.0\"?>\n\
             <markers>\n\
             \t<marker name=\"Melbourne\" lat=\"-37.8136\" lng=\"144.9631\"/>\n\
             \t<marker name=\"Sydney\" lat=\"-33.8688\" lng=\"151.2093\"/>\n\
             </markers>"
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let markers = vec![MarkerAttributes::from([(
            "name".to_owned(),
            "Fish & Chips".to_owned(),
        )])];
        let body = render_markers(&OutputFormat::Xml, &markers).unwrap();
        assert!(body.contains("name=\"Fish &amp; Chips\""));
    }

    #[test]
    fn empty_result_set_renders_empty_root() {
        let body = render_markers(&OutputFormat::Xml, &[]).unwrap();
        assert_eq!(body, "<?xml version=\"1.0\"?>\n<markers>\n</markers>");
    }

    #[test]
    fn unsupported_format_is_an_error() {
        let result =
            render_markers(&OutputFormat::from_name("json"), &[]);
        assert!(matches!(
            result,
            Err(RequestError::UnsupportedFormat(name)) if name == "json"
        ));
    }
}
