//! Serialised XML parsed back with an independent reader

mod common;

use common::*;
use pcehr_cda::config::GeneratorConfig;
use pcehr_cda::domain::documents::ClinicalDocument;
use pcehr_cda::CdaGenerator;
use test_case::test_case;

const CDA_NS: &str = "urn:hl7-org:v3";
const EXT_NS: &str = "http://ns.electronichealth.net.au/Ci/Cda/Extensions/3.0";

#[test]
fn test_every_document_is_well_formed_cda() {
    let generator = CdaGenerator::default();
    for document in all_documents() {
        let xml = generator.render(&document).unwrap();
        let parsed = roxmltree::Document::parse(&xml)
            .unwrap_or_else(|e| panic!("{:?} is not well-formed: {e}", document.kind()));

        let root = parsed.root_element();
        assert_eq!(root.tag_name().name(), "ClinicalDocument");
        assert_eq!(root.tag_name().namespace(), Some(CDA_NS));

        let title = root
            .children()
            .find(|n| n.has_tag_name((CDA_NS, "title")))
            .and_then(|n| n.text());
        assert_eq!(title, Some(document.kind().title()));
    }
}

#[test]
fn test_extension_elements_use_extension_namespace() {
    let xml = CdaGenerator::default().render(&minimal_e_referral()).unwrap();
    let parsed = roxmltree::Document::parse(&xml).unwrap();

    let completion = parsed
        .descendants()
        .find(|n| n.tag_name().name() == "completionCode")
        .unwrap();
    assert_eq!(completion.tag_name().namespace(), Some(EXT_NS));

    let coverage = parsed
        .descendants()
        .filter(|n| n.has_tag_name((EXT_NS, "coverage2")))
        .count();
    assert_eq!(coverage, 1);
}

#[test]
fn test_text_is_escaped() {
    let mut notes = consumer_notes();
    notes.note = Some(pcehr_cda::domain::clinical::ConsumerNote::new(
        "Peanuts & <shellfish>",
        "Reaction \"severe\"",
    ));
    let xml = CdaGenerator::default().render(&notes).unwrap();
    assert!(xml.contains("Peanuts &amp; &lt;shellfish&gt;"));

    let parsed = roxmltree::Document::parse(&xml).unwrap();
    assert!(parsed
        .descendants()
        .filter_map(|n| n.text())
        .any(|t| t == "Peanuts & <shellfish>"));
}

#[test_case(true, 2; "declaration and indent")]
#[test_case(false, 0; "compact without declaration")]
fn test_writer_options_from_config(xml_declaration: bool, indent: usize) {
    let config = GeneratorConfig {
        xml_declaration,
        indent,
        ..Default::default()
    };
    let xml = CdaGenerator::from_config(&config)
        .unwrap()
        .render(&physical_measurements())
        .unwrap();

    assert_eq!(xml.starts_with("<?xml"), xml_declaration);
    assert_eq!(xml.contains('\n'), indent > 0);
    assert!(roxmltree::Document::parse(&xml).is_ok());
}

#[test]
fn test_empty_narrative_mode_writes_empty_text() {
    let config = GeneratorConfig {
        narrative_mode: "empty".to_string(),
        ..Default::default()
    };
    let xml = CdaGenerator::from_config(&config)
        .unwrap()
        .render(&physical_measurements())
        .unwrap();
    let parsed = roxmltree::Document::parse(&xml).unwrap();

    let text = parsed
        .descendants()
        .find(|n| n.has_tag_name((CDA_NS, "text")) && n.parent().is_some_and(|p| p.has_tag_name((CDA_NS, "section"))))
        .unwrap();
    assert_eq!(text.children().filter(|c| c.is_element()).count(), 0);
}
