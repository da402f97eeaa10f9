//! End-to-end tests for SYLK decoding

use super::*;
use crate::common::Error;
use std::io::Cursor;

#[test]
fn test_clarisworks_document() {
    let doc = SylkDocument::parse_str("ID;PClariWorks\nP;P0.00\nF;P0\nC;X1;Y1;K42\n").unwrap();

    assert_eq!(doc.table().get(1, 1), Some("42"));
    assert_eq!(doc.epoch(), DateEpoch::Mac);

    let formats: Vec<(&str, DataKind)> = doc
        .formats()
        .iter()
        .map(|f| (f.pattern(), f.kind()))
        .collect();
    assert_eq!(formats, [("0.00", DataKind::Float)]);
    assert!(doc.unknown_fields().is_empty());
}

#[test]
fn test_mac_epoch_dates() {
    let sylk = "ID;PAppleWorks\r\nP;Pm/d/yy\r\nF;P0;Y1;X1\r\nC;K0\r\nC;X2;K1\r\n";
    let doc = SylkDocument::parse_str(sylk).unwrap();

    assert_eq!(doc.table().row(1).unwrap(), &["01/01/1904", "02/01/1904"]);
}

#[test]
fn test_excel_style_document() {
    let sylk = concat!(
        "ID;PWXL;N;E\r\n",
        "P;PGeneral\r\n",
        "P;P0\r\n",
        "P;Pdd/mm/yyyy\r\n",
        "P;FCalibri;M220\r\n",
        "B;Y3;X3;D0 0 2 2\r\n",
        "O;L;D;V0;K47;G100 0.001\r\n",
        "F;P0;DG0G8;M64\r\n",
        "C;Y1;X1;K\"Name\"\r\n",
        "C;X2;K\"Joined\"\r\n",
        "C;X3;K\"Score\"\r\n",
        "C;Y2;X1;K\"Ada; Countess\"\r\n",
        "F;P2;FG0G;X2\r\n",
        "C;K19723\r\n",
        "F;P1;FI0G;X3\r\n",
        "C;K-12\r\n",
        "C;Y3;X1;K\"Quote \"\"Q\"\"\"\r\n",
        "F;P0;X3\r\n",
        "C;K0.125\r\n",
        "E\r\n",
    );
    let doc = SylkDocument::parse_str(sylk).unwrap();
    let table = doc.table();

    assert_eq!(doc.epoch(), DateEpoch::Unix);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.row(1).unwrap(), &["Name", "Joined", "Score"]);
    assert_eq!(table.get(1, 2), Some("Ada; Countess"));
    assert_eq!(table.get(2, 2), Some("01/01/2024"));
    assert_eq!(table.get(3, 2), Some("-12"));
    assert_eq!(table.row(3).unwrap(), &["Quote \"Q\"", " ", "0.125"]);

    let kinds: Vec<DataKind> = doc.formats().iter().map(PrintFormat::kind).collect();
    assert_eq!(kinds, [DataKind::String, DataKind::Int, DataKind::Date]);

    let unknown = doc.unknown_fields();
    assert!(unknown.contains("P", 'F'));
    assert!(unknown.contains("B", 'D'));
    assert!(unknown.contains("O", 'G'));
    assert!(unknown.contains("F", 'D'));
    assert!(unknown.contains("F", 'M'));
    assert!(!unknown.contains("C", 'K'));
    assert!(unknown.get("ID").is_none());
}

#[test]
fn test_unknown_report_text() {
    let doc = SylkDocument::parse_str("Q;Zfoo\nC;X1;Y1;K1;R2\n").unwrap();

    let mut out = Vec::new();
    doc.write_unknown(&mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    assert_eq!(report, "Unrecognized fields (subfields):\nC (R)\nQ (Z)\n");

    let clean = SylkDocument::parse_str("C;X1;Y1;K1\n").unwrap();
    let mut out = Vec::new();
    clean.write_unknown(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No unrecognized fields\n");
}

#[test]
fn test_rows_replay_identically() {
    let sylk = "C;Y3;X2;K\"c\"\nC;Y1;X4;K1\nC;Y2;X1;K2.5\n";
    let doc = SylkDocument::parse(Cursor::new(sylk)).unwrap();

    let first: Vec<Vec<Cell>> = doc.rows().map(<[Cell]>::to_vec).collect();
    let second: Vec<Vec<Cell>> = doc.rows().map(<[Cell]>::to_vec).collect();
    assert_eq!(first, second);

    assert_eq!(first.len(), 3);
    assert_eq!(first[0], [" ", " ", " ", "1"]);
    assert_eq!(first[1], ["2.5", " "]);
    assert_eq!(first[2], [" ", "c"]);
}

#[test]
fn test_fatal_error_aborts_parse() {
    let err = SylkDocument::parse_str("P;P0\nF;P3\nC;X1;Y1;K1\n").unwrap_err();
    assert!(matches!(err, Error::AtRecord { record: 2, .. }));
    assert!(matches!(
        err.root(),
        Error::FormatIndexOutOfRange {
            index: 3,
            registered: 1
        }
    ));

    let err = SylkDocument::parse_str("C;X1;Y1;KFALSE\n").unwrap_err();
    assert!(matches!(
        err.root(),
        Error::InvalidLiteral(LiteralError::Unsupported(_))
    ));
}

#[test]
fn test_huge_coordinates_fail_cleanly() {
    let err = SylkDocument::parse_str("C;X3000000000;Y1;K1\n").unwrap_err();
    assert!(matches!(err, Error::AtRecord { record: 1, .. }));
    assert!(matches!(
        err.root(),
        Error::CoordinateOutOfRange {
            x: 3_000_000_000,
            y: 1,
            ..
        }
    ));

    let err = SylkDocument::parse_str("C;X1;Y4000000;K1\n").unwrap_err();
    assert!(matches!(err.root(), Error::CoordinateOutOfRange { .. }));

    // Cursor moves alone never allocate.
    let doc = SylkDocument::parse_str("F;X4000000000;Y4000000000\nC;X1;Y1;K1\n").unwrap();
    assert_eq!(doc.table().cell_count(), 1);
}

#[test]
fn test_cell_budget_from_config() {
    let limits = TableLimits {
        max_cells: 100,
        ..TableLimits::default()
    };
    let config = SylkConfig::new().with_limits(limits);
    let doc = SylkDocument::parse_str_with_config("C;X10;Y10;K1\n", config.clone()).unwrap();
    assert_eq!(doc.table().cell_count(), 100);

    let err = SylkDocument::parse_str_with_config("C;X10;Y10;K1\nC;X11;K2\n", config).unwrap_err();
    assert!(matches!(err, Error::AtRecord { record: 2, .. }));
    assert!(matches!(
        err.root(),
        Error::TableTooLarge {
            cells: 101,
            limit: 100
        }
    ));
}

#[test]
fn test_lenient_literals() {
    let config = SylkConfig::new().with_lenient_literals(true);
    let doc = SylkDocument::parse_str_with_config("C;X1;Y1;KTRUE\nC;X2;K#N/A\n", config).unwrap();
    assert_eq!(doc.table().row(1).unwrap(), &["TRUE", "#N/A"]);
    assert!(doc.config().lenient_literals);
}

#[test]
fn test_open_from_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"ID;P Sage\r\nP;Pd-mmm-yy\r\nF;P0\r\nC;X1;Y1;K1\r\n")
        .unwrap();

    let doc = SylkDocument::open(file.path()).unwrap();
    assert_eq!(doc.epoch(), DateEpoch::Pc);
    assert_eq!(doc.table().get(1, 1), Some("02/01/1900"));

    let config = SylkConfig::new()
        .with_epoch(DateEpoch::Unix)
        .with_date_format("%Y-%m-%d");
    let doc = SylkDocument::open_with_config(file.path(), config).unwrap();
    assert_eq!(doc.table().get(1, 1), Some("1970-01-02"));

    let table = doc.into_table();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_missing_file() {
    let err = SylkDocument::open("/nonexistent/input.slk").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
