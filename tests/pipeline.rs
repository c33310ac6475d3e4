use std::io::Write;

use tempfile::NamedTempFile;

use apriori::{apriori_algorithm, io, MiningConfig};

#[test]
fn mines_log_file_end_to_end() {
    let mut log = NamedTempFile::new().unwrap();
    // Five baskets over SKUs 10, 20, 30; every pair co-occurs 3 times
    writeln!(log, "10 20 30").unwrap();
    writeln!(log, "10 20").unwrap();
    writeln!(log, "10 30").unwrap();
    writeln!(log, "20 30").unwrap();
    writeln!(log, "30 20 10").unwrap();

    let store = io::read_transactions(log.path()).unwrap();
    let levels = apriori_algorithm(&store, &MiningConfig::new(2, 3)).unwrap();

    let out = NamedTempFile::new().unwrap();
    io::write_frequent_sets(out.path(), &levels).unwrap();

    let contents = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(contents, "2 3 10 20\n2 3 10 30\n2 3 20 30\n");
}

#[test]
fn empty_log_produces_empty_output() {
    let log = NamedTempFile::new().unwrap();

    let store = io::read_transactions(log.path()).unwrap();
    let levels = apriori_algorithm(&store, &MiningConfig::default()).unwrap();

    let out = NamedTempFile::new().unwrap();
    io::write_frequent_sets(out.path(), &levels).unwrap();
    assert_eq!(std::fs::read_to_string(out.path()).unwrap(), "");
}
