use crate::domain::model::RawDocument;
use crate::utils::error::Result;
use roxmltree::{Document, Node, ParsingOptions};

const ABSTRACT_TEXT_TAG: &str = "AbstractText";

/// 從 PubMed XML 取出摘要文字
///
/// 與 XPath `//AbstractText/text()` 相同：只取 `AbstractText` 元素的直接文字子節點，
/// 依文件順序串接，不加分隔符。沒有摘要時回傳空字串。
pub fn extract_abstract(document: &RawDocument) -> Result<String> {
    let xml = std::str::from_utf8(document.as_bytes())?;

    // PubMed 回應帶有 <!DOCTYPE PubmedArticleSet ...>
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let text: String = doc
        .descendants()
        .filter(|node| node.is_text() && node.parent().is_some_and(is_abstract_text))
        .filter_map(|node| node.text())
        .collect();

    tracing::debug!("Extracted abstract of {} characters", text.chars().count());
    Ok(text)
}

fn is_abstract_text(node: Node) -> bool {
    node.is_element()
        && node.tag_name().name() == ABSTRACT_TEXT_TAG
        && node.tag_name().namespace().is_none()
}
