mod common;

use common::fixtures::*;
use common::{GeneratedPdf, TestResult, fixed_generator, generate, generate_raw, init_logging};
use dossier::style::MIN_FONT_SIZE;
use dossier::{DocumentGenerator, DocumentSelection, LayoutConfig, TemplateKind, read_metadata};
use dossier_style::BuiltinFont;

#[test]
fn identical_input_gives_identical_bytes() -> TestResult {
    init_logging();
    let record = full_record();
    for kind in TemplateKind::ALL {
        let layout = LayoutConfig::default().with_template(kind.id());
        let first = generate_raw(&record, &layout, &DocumentSelection::all())?;
        let second = generate_raw(&record, &layout, &DocumentSelection::all())?;
        assert_eq!(first, second, "{kind} output differs between runs");
    }
    Ok(())
}

#[test]
fn metadata_is_written_into_the_document() -> TestResult {
    init_logging();
    let bytes = generate_raw(&full_record(), &LayoutConfig::default(), &DocumentSelection::all())?;
    let info = read_metadata(&bytes)?;
    assert_eq!(info.title, "Erika Mustermann \u{2013} Application as Platform Engineer");
    assert_eq!(info.author, "Erika Mustermann");
    assert_eq!(info.subject, "Application as Platform Engineer at Globex");
    assert_eq!(info.keywords[..2], ["Platform Engineer".to_string(), "Globex".to_string()]);
    assert!(info.keywords.contains(&"Kubernetes".to_string()));
    assert_eq!(info.producer, "dossier");
    assert_eq!(info.creation_date, None);
    Ok(())
}

#[test]
fn metadata_does_not_touch_page_content() -> TestResult {
    init_logging();
    let record = full_record();
    let layout = LayoutConfig::default();
    let plain = DocumentGenerator::builder().with_metadata(false).build();
    let without = GeneratedPdf::from_bytes(plain.generate(&record, &layout, &DocumentSelection::cv_only())?)?;
    let with = GeneratedPdf::from_bytes(generate_raw(&record, &layout, &DocumentSelection::cv_only())?)?;
    assert_eq!(without.page_count(), with.page_count());
    assert_eq!(
        common::pdf_assertions::extract_text(&without.doc),
        common::pdf_assertions::extract_text(&with.doc)
    );
    Ok(())
}

#[test]
fn timestamp_and_producer_are_configurable() -> TestResult {
    init_logging();
    let generator = DocumentGenerator::builder().with_producer("acme-hr").with_timestamp(true).build();
    let bytes = generator.generate(&acme_record(), &LayoutConfig::default(), &DocumentSelection::cv_only())?;
    let info = read_metadata(&bytes)?;
    assert_eq!(info.producer, "acme-hr");
    let stamp = info.creation_date.expect("creation date");
    assert!(stamp.starts_with("D:20"), "unexpected date {stamp}");
    assert_eq!(info.title, "Application");
    Ok(())
}

#[test]
fn photo_is_embedded_once_across_documents() -> TestResult {
    init_logging();
    let mut record = full_record();
    record.personal_data.photo = Some(png_photo());
    let pdf = generate(&record, &LayoutConfig::default(), &DocumentSelection::all())?;
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 1);

    let hidden = LayoutConfig { show_photo: false, ..LayoutConfig::default() };
    let pdf = generate(&record, &hidden, &DocumentSelection::all())?;
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 0);
    Ok(())
}

#[test]
fn undecodable_photo_is_left_out() -> TestResult {
    init_logging();
    let mut record = full_record();
    record.personal_data.photo = Some(garbage_photo());
    for kind in TemplateKind::ALL {
        let layout = LayoutConfig::default().with_template(kind.id());
        let pdf = generate(&record, &layout, &DocumentSelection::all())?;
        assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 0);
        assert_pdf_contains_text!(pdf, "Erika Mustermann");
    }
    Ok(())
}

#[test]
fn pages_are_a4() -> TestResult {
    init_logging();
    let pdf = generate(&full_record(), &LayoutConfig::default(), &DocumentSelection::all())?;
    for page in 1..=pdf.page_count() as u32 {
        assert_pdf_page_size!(pdf, page, 595.28, 841.89);
    }
    assert_pdf_has_font!(pdf, "Helvetica");
    Ok(())
}

#[test]
fn font_family_selects_the_face_pair() -> TestResult {
    init_logging();
    let layout = LayoutConfig { font_family: "Georgia".into(), ..LayoutConfig::default() };
    let pages = fixed_generator().layout_document(&full_record(), &layout, &DocumentSelection::cv_only())?;
    for page in &pages {
        for (_, text) in page.text_elements() {
            assert!(matches!(text.style.font, BuiltinFont::TimesRoman | BuiltinFont::TimesBold));
        }
    }

    let unknown = LayoutConfig { font_family: "Comic Neue".into(), ..LayoutConfig::default() };
    let pages = fixed_generator().layout_document(&full_record(), &unknown, &DocumentSelection::cv_only())?;
    let first = pages[0].text_elements().next().map(|(_, t)| t.style.font);
    assert!(matches!(first, Some(BuiltinFont::Helvetica | BuiltinFont::HelveticaBold)));
    Ok(())
}

#[test]
fn tiny_base_size_is_floored() -> TestResult {
    init_logging();
    let layout = LayoutConfig { font_size: 4.0, ..LayoutConfig::default() };
    let pages = fixed_generator().layout_document(&full_record(), &layout, &DocumentSelection::all())?;
    for page in &pages {
        for (_, text) in page.text_elements() {
            assert!(text.style.font_size >= MIN_FONT_SIZE, "{} set at {}", text.content, text.style.font_size);
        }
    }
    Ok(())
}

#[test]
fn invalid_colors_fall_back() -> TestResult {
    init_logging();
    let layout = LayoutConfig {
        primary_color: "not-a-color".into(),
        secondary_color: "#12".into(),
        ..LayoutConfig::default().with_template("banded")
    };
    let pdf = generate(&full_record(), &layout, &DocumentSelection::cv_only())?;
    assert_pdf_min_pages!(pdf, 1);
    Ok(())
}

#[test]
fn writes_to_a_file() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("application.pdf");
    fixed_generator().generate_to_file(&full_record(), &LayoutConfig::default(), &DocumentSelection::all(), &path)?;
    let pdf = GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
    assert_pdf_min_pages!(pdf, 3);
    assert_pdf_contains_text!(pdf, "Platform Engineer");
    Ok(())
}
