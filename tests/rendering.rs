use pdf_blocks::fonts;
use pdf_blocks::output;
use pdf_blocks::samples::{canvas_cut, cell_borders, styled_text};
use sha2::{Digest, Sha256};

type BuildFn = fn() -> Result<genpdf::Document, genpdf::error::Error>;

const SAMPLES: [(&str, BuildFn); 3] = [
    ("styled_text", styled_text::document),
    ("canvas_cut", canvas_cut::document),
    ("cell_borders", cell_borders::document),
];

fn render_sample(build: BuildFn) -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let document = build().expect("build sample document");
    let pdf = output::render_to_bytes(document).expect("render sample document");
    Some(pdf.bytes)
}

fn skip(test: &str) {
    eprintln!(
        "Skipping {}: fonts missing. Install Liberation Sans or set {}.",
        test,
        fonts::FONTS_DIR_ENV
    );
}

/// Zeroes out every byte between `tag` and the next `terminator` occurrence.
fn zero_between(data: &mut [u8], tag: &[u8], terminator: u8) {
    let mut index = 0;
    while index + tag.len() <= data.len() {
        if data[index..].starts_with(tag) {
            index += tag.len();
            while index < data.len() && data[index] != terminator {
                data[index] = b'0';
                index += 1;
            }
        } else {
            index += 1;
        }
    }
}

/// Rendering embeds timestamps and random identifiers; blank them out before hashing.
fn scrub_volatile_metadata(bytes: &[u8]) -> Vec<u8> {
    const VOLATILE: &[(&[u8], u8)] = &[
        (b"/CreationDate(", b')'),
        (b"/ModDate(", b')'),
        (b"/Producer(", b')'),
        (b"/ID[", b']'),
        (b"<xmp:CreateDate>", b'<'),
        (b"<xmp:ModifyDate>", b'<'),
        (b"<xmp:MetadataDate>", b'<'),
        (b"<xmpMM:DocumentID>", b'<'),
        (b"<xmpMM:InstanceID>", b'<'),
        (b"<xmpMM:VersionID>", b'<'),
    ];

    let mut scrubbed = bytes.to_vec();
    for (tag, terminator) in VOLATILE {
        zero_between(&mut scrubbed, tag, *terminator);
    }
    scrubbed
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(scrub_volatile_metadata(bytes));
    digest.into()
}

#[test]
fn samples_render_non_empty_pdf_output() {
    for (name, build) in SAMPLES {
        let Some(bytes) = render_sample(build) else {
            skip("samples_render_non_empty_pdf_output");
            return;
        };
        assert!(
            bytes.starts_with(b"%PDF-"),
            "{} should start with a PDF header",
            name
        );
        assert!(bytes.len() > 1000, "{} output is suspiciously small", name);
    }
}

#[test]
fn rendered_samples_reopen_as_single_page_documents() {
    for (name, build) in SAMPLES {
        let Some(bytes) = render_sample(build) else {
            skip("rendered_samples_reopen_as_single_page_documents");
            return;
        };
        let document = lopdf::Document::load_mem(&bytes)
            .unwrap_or_else(|err| panic!("{} should reopen as a valid PDF: {}", name, err));
        assert_eq!(
            document.get_pages().len(),
            1,
            "{} should fit on a single page",
            name
        );
    }
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_sample(cell_borders::document) else {
        skip("rendering_is_deterministic");
        return;
    };
    let Some(bytes_b) = render_sample(cell_borders::document) else {
        skip("rendering_is_deterministic");
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}
