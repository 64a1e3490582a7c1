use launchdash_core::dataset::{Dataset, Outcome};
use launchdash_core::error::DashError;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const HEADER: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

fn dataset_path() -> String {
    format!(
        "{}/../../data/spacex_launch_dash.csv",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn expect_load_error(csv: &str) -> String {
    match Dataset::from_reader(Cursor::new(csv.to_string())) {
        Err(DashError::DataLoad(msg)) => msg,
        other => panic!("expected DataLoad error, got {:?}", other),
    }
}

#[test]
fn test_loader_reads_bundled_dataset() {
    let ds = Dataset::load(dataset_path()).unwrap();

    assert_eq!(ds.len(), 56);
    assert_eq!(ds.min_payload(), 0.0);
    assert_eq!(ds.max_payload(), 9600.0);
    assert_eq!(
        ds.sites(),
        ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
}

#[test]
fn test_loader_parses_file_with_extra_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    writeln!(file, "0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0").unwrap();
    writeln!(file, "1,2,KSC LC-39A,1,3696.65,F9 FT B1032.1,FT").unwrap();

    let ds = Dataset::load(file.path()).unwrap();
    let all = ds.all();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].site, "CCAFS LC-40");
    assert_eq!(all[0].outcome, Outcome::Failure);
    assert_eq!(all[1].payload_mass_kg, 3696.65);
    assert_eq!(all[1].booster_version_category, "FT");
    assert_eq!(all[1].outcome_class(), 1);
}

#[test]
fn test_loader_rejects_missing_column() {
    let msg = expect_load_error("Launch Site,Payload Mass (kg),class\nKSC LC-39A,100,1\n");
    assert!(msg.contains("Booster Version Category"), "{}", msg);
}

#[test]
fn test_loader_rejects_malformed_payload() {
    let msg = expect_load_error(
        "Launch Site,Payload Mass (kg),Booster Version Category,class\nKSC LC-39A,heavy,FT,1\n",
    );
    assert!(msg.contains("row 1"), "{}", msg);
}

#[test]
fn test_loader_rejects_negative_payload() {
    let msg = expect_load_error(
        "Launch Site,Payload Mass (kg),Booster Version Category,class\nKSC LC-39A,10,FT,1\nKSC LC-39A,-5,FT,0\n",
    );
    assert!(msg.contains("row 2"), "{}", msg);
}

#[test]
fn test_loader_rejects_out_of_domain_class() {
    let msg = expect_load_error(
        "Launch Site,Payload Mass (kg),Booster Version Category,class\nKSC LC-39A,10,FT,2\n",
    );
    assert!(msg.contains("class"), "{}", msg);
}

#[test]
fn test_loader_rejects_short_rows() {
    expect_load_error(
        "Launch Site,Payload Mass (kg),Booster Version Category,class\nKSC LC-39A,10\n",
    );
}

#[test]
fn test_loader_rejects_header_only_file() {
    let msg = expect_load_error("Launch Site,Payload Mass (kg),Booster Version Category,class\n");
    assert!(msg.contains("no launch records"), "{}", msg);
}

#[test]
fn test_loader_missing_file_is_a_load_failure() {
    let err = Dataset::load("does/not/exist.csv").unwrap_err();
    assert!(err.is_load_failure());
}
