//! Rendering of [`StrucDocText`] into a section `<text>` element

use crate::domain::common::{NarrativeBlock, NarrativeTable, StrucDocText};
use crate::xml::XmlElement;

pub fn render_text(text: &StrucDocText) -> XmlElement {
    XmlElement::new("text").children_from(text.blocks.iter().map(render_block))
}

fn render_block(block: &NarrativeBlock) -> XmlElement {
    match block {
        NarrativeBlock::Paragraph { text } => XmlElement::new("paragraph").text(text.as_str()),
        NarrativeBlock::List { items } => XmlElement::new("list")
            .children_from(items.iter().map(|item| XmlElement::new("item").text(item.as_str()))),
        NarrativeBlock::Table(table) => render_table(table),
    }
}

fn render_table(table: &NarrativeTable) -> XmlElement {
    let caption = table
        .caption
        .as_ref()
        .map(|caption| XmlElement::new("caption").text(caption.as_str()));

    let head = (!table.headers.is_empty()).then(|| {
        XmlElement::new("thead").child(
            XmlElement::new("tr")
                .children_from(table.headers.iter().map(|h| XmlElement::new("th").text(h.as_str()))),
        )
    });

    let body = XmlElement::new("tbody").children_from(table.rows.iter().map(|row| {
        XmlElement::new("tr").children_from(row.iter().map(|cell| XmlElement::new("td").text(cell.as_str())))
    }));

    XmlElement::new("table")
        .attr("border", "1")
        .child_opt(caption)
        .child_opt(head)
        .child(body)
}
