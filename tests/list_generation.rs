use channel_catalog::errors::AppError;
use channel_catalog::generator::ListGenerator;
use channel_catalog::models::DocumentKind;
use tempfile::TempDir;

const TELEVISION_YML: &str = r#"
- name: Generalistas
  channels:
    - name: La 1
      m3u8: https://example.com/la1/main.m3u8
      web: https://www.example.com/la1
      epg_id: La1.TV
    - name: La 2
      m3u8: https://example.com/la2/main.m3u8
- name: Autonómicos
  subcategories:
    - name: Andalucía
      channels:
        - name: Canal Sur
          m3u8: https://example.com/canalsur.m3u8
          info: Desconexiones provinciales
    - name: Galicia
      channels:
        - name: TVG
- name: Internacionales
  channels: []
"#;

const RADIO_YML: &str = r#"[{"name": "Nacionales", "channels": [{"name": "RNE", "stream": "https://example.com/rne.mp3"}]}]"#;

fn catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/television.yml"), TELEVISION_YML).unwrap();
    std::fs::write(dir.path().join("data/radio.yml"), RADIO_YML).unwrap();
    dir
}

fn generator(dir: &TempDir) -> ListGenerator {
    ListGenerator::new(dir.path(), dir.path().join("data"))
}

#[test]
fn test_generates_television_document() {
    let dir = catalog();
    let generated = generator(&dir).generate(DocumentKind::Television).unwrap();

    assert_eq!(generated.path, dir.path().join("TELEVISION.md"));
    assert_eq!(generated.categories, 3);
    assert_eq!(generated.channels, 4);

    let doc = std::fs::read_to_string(&generated.path).unwrap();
    let expected = "\
# Canales de Televisión

## Generalistas

| Canal | M3U8 | Web | Logo | EPG ID | Info |
| - | - | - | - | - | - |
| La 1 | https://example.com/la1/main.m3u8 | https://www.example.com/la1 | - | La1.TV | - |
| La 2 | https://example.com/la2/main.m3u8 | - | - | - | - |

## Autonómicos

### Andalucía

| Canal | M3U8 | Web | Logo | EPG ID | Info |
| - | - | - | - | - | - |
| Canal Sur | https://example.com/canalsur.m3u8 | - | - | - | Desconexiones provinciales |

### Galicia

| Canal | M3U8 | Web | Logo | EPG ID | Info |
| - | - | - | - | - | - |
| TVG | - | - | - | - | - |

## Internacionales

";
    assert_eq!(doc, expected);
}

#[test]
fn test_one_heading_per_category_in_input_order() {
    let dir = catalog();
    let generated = generator(&dir).generate(DocumentKind::Television).unwrap();
    let doc = std::fs::read_to_string(generated.path).unwrap();

    let headings: Vec<&str> = doc.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(
        headings,
        ["## Generalistas", "## Autonómicos", "## Internacionales"]
    );
}

#[test]
fn test_generate_all_writes_both_documents() {
    let dir = catalog();
    let generated = generator(&dir).generate_all().unwrap();

    let kinds: Vec<_> = generated.iter().map(|g| g.kind).collect();
    assert_eq!(kinds, DocumentKind::ALL);

    let radio = std::fs::read_to_string(dir.path().join("RADIO.md")).unwrap();
    assert!(radio.starts_with("# Emisoras de Radio\n\n## Nacionales\n\n"));
    assert!(radio.contains("| RNE | https://example.com/rne.mp3 | - | - | - |\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let dir = catalog();
    let generator = generator(&dir);

    generator.generate(DocumentKind::Television).unwrap();
    let first = std::fs::read(dir.path().join("TELEVISION.md")).unwrap();
    generator.generate(DocumentKind::Television).unwrap();
    let second = std::fs::read(dir.path().join("TELEVISION.md")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_output_is_overwritten_not_appended() {
    let dir = catalog();
    std::fs::write(dir.path().join("RADIO.md"), "stale content\n".repeat(100)).unwrap();

    generator(&dir).generate(DocumentKind::Radio).unwrap();

    let radio = std::fs::read_to_string(dir.path().join("RADIO.md")).unwrap();
    assert!(!radio.contains("stale content"));
}

#[test]
fn test_missing_data_file() {
    let dir = catalog();
    std::fs::remove_file(dir.path().join("data/radio.yml")).unwrap();

    let err = generator(&dir).generate(DocumentKind::Radio).unwrap_err();
    match err {
        AppError::FileNotFound { path } => assert!(path.ends_with("data/radio.yml")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("RADIO.md").exists());
}

#[test]
fn test_malformed_data_aborts_before_write() {
    let dir = catalog();
    std::fs::write(dir.path().join("TELEVISION.md"), "previous\n").unwrap();
    std::fs::write(
        dir.path().join("data/television.yml"),
        "- name: Broken\n  channels: not-a-list\n",
    )
    .unwrap();

    let err = generator(&dir).generate(DocumentKind::Television).unwrap_err();
    assert!(matches!(err, AppError::Parse { .. }));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("TELEVISION.md")).unwrap(),
        "previous\n"
    );
}

#[test]
fn test_list_valued_field_aborts_before_write() {
    let dir = catalog();
    std::fs::write(
        dir.path().join("data/radio.yml"),
        "- name: Nacionales\n  channels:\n    - name: X\n      stream:\n        - https://a.example.com/1\n        - https://a.example.com/2\n",
    )
    .unwrap();

    let err = generator(&dir).generate(DocumentKind::Radio).unwrap_err();
    match err {
        AppError::Parse { path, .. } => assert!(path.ends_with("data/radio.yml")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("RADIO.md").exists());
}

#[test]
fn test_extra_subcategory_keys_are_ignored() {
    let dir = catalog();
    std::fs::write(
        dir.path().join("data/radio.yml"),
        "- name: Autonómicas\n  subcategories:\n    - name: Galicia\n      description: Emisoras gallegas\n      channels:\n        - name: Radio Galega\n",
    )
    .unwrap();

    let generated = generator(&dir).generate(DocumentKind::Radio).unwrap();
    assert_eq!(generated.channels, 1);
    let doc = std::fs::read_to_string(&generated.path).unwrap();
    assert!(doc.contains("### Galicia\n\n"));
    assert!(!doc.contains("Emisoras gallegas"));
}

#[test]
fn test_generate_all_stops_at_first_failure() {
    let dir = catalog();
    std::fs::remove_file(dir.path().join("data/television.yml")).unwrap();

    assert!(generator(&dir).generate_all().is_err());
    assert!(!dir.path().join("RADIO.md").exists());
}
