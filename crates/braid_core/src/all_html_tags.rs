use phf::phf_set;

use crate::{ElementFragment, ElementRegistry, Fragment};

/// Standard HTML element names, uppercased the way the compiler normalizes
/// tag names before consulting the oracle.
static HTML_TAGS: phf::Set<&'static str> = phf_set! {
    "A", "ABBR", "ADDRESS", "AREA", "ARTICLE", "ASIDE", "AUDIO",
    "B", "BASE", "BDI", "BDO", "BLOCKQUOTE", "BODY", "BR", "BUTTON",
    "CANVAS", "CAPTION", "CITE", "CODE", "COL", "COLGROUP",
    "DATA", "DATALIST", "DD", "DEL", "DETAILS", "DFN", "DIALOG", "DIV",
    "DL", "DT",
    "EM", "EMBED",
    "FIELDSET", "FIGCAPTION", "FIGURE", "FOOTER", "FORM",
    "H1", "H2", "H3", "H4", "H5", "H6", "HEAD", "HEADER", "HGROUP", "HR",
    "HTML",
    "I", "IFRAME", "IMG", "INPUT", "INS",
    "KBD",
    "LABEL", "LEGEND", "LI", "LINK",
    "MAIN", "MAP", "MARK", "MENU", "META", "METER",
    "NAV", "NOSCRIPT",
    "OBJECT", "OL", "OPTGROUP", "OPTION", "OUTPUT",
    "P", "PARAM", "PICTURE", "PRE", "PROGRESS",
    "Q",
    "RP", "RT", "RUBY",
    "S", "SAMP", "SCRIPT", "SECTION", "SELECT", "SLOT", "SMALL", "SOURCE",
    "SPAN", "STRONG", "STYLE", "SUB", "SUMMARY", "SUP",
    "TABLE", "TBODY", "TD", "TEMPLATE", "TEXTAREA", "TFOOT", "TH", "THEAD",
    "TIME", "TITLE", "TR", "TRACK",
    "U", "UL",
    "VAR", "VIDEO",
    "WBR",
};

/// Checks whether an uppercase tag name is a standard HTML element.
#[inline]
pub fn is_html_tag(tag_name: &str) -> bool {
    HTML_TAGS.contains(tag_name)
}

/// Default [`ElementRegistry`] recognizing the standard HTML element set and
/// constructing plain [`ElementFragment`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlElements;

impl ElementRegistry for HtmlElements {
    fn is_known_element(&self, tag_name: &str) -> bool {
        is_html_tag(tag_name)
    }

    fn create_element(&self, tag_name: &str, children: Vec<Fragment>) -> Fragment {
        Fragment::Element(ElementFragment {
            tag_name: tag_name.to_owned(),
            children,
        })
    }
}
