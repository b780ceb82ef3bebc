//! End-to-end tests over real properties files: reader defaults, full
//! builder chains, and the error-set contract.

use flatprops::{PropBuilder, PropReader, PropStore};
use std::collections::HashSet;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

#[derive(Debug, PartialEq, Eq, Hash)]
enum Region {
    North,
    South,
    East,
}

impl FromStr for Region {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Region::North),
            "SOUTH" => Ok(Region::South),
            "EAST" => Ok(Region::East),
            _ => Err(()),
        }
    }
}

fn write_props(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

const SAMPLE: &str = "\
# service settings
service.name=dispatch
service.port=8080
service.timeout=notanumber
service.active=y
service.regions=NORTH, SOUTH ,EAST
service.regions.bad=NORTH,WEST
batch.size=42
";

#[test]
fn reader_reads_typed_values_from_file() {
    let file = write_props(SAMPLE);
    let reader = PropReader::load(file.path()).unwrap();

    assert_eq!(reader.get_string("service.name"), "dispatch");
    assert_eq!(reader.get_string_upper("service.name"), "DISPATCH");
    assert_eq!(reader.get_int("service.port"), 8080);
    assert_eq!(reader.get_long("service.port"), 8080);
    assert!(reader.get_bool("service.active"));
    assert_eq!(reader.get_int("service.timeout"), 0);
    assert_eq!(reader.get_integer("service.timeout"), None);

    let regions: HashSet<Region> = reader.get_enum_set("service.regions").unwrap();
    assert_eq!(
        regions,
        HashSet::from([Region::North, Region::South, Region::East])
    );
    assert!(reader.get_enum_set::<Region>("service.regions.bad").is_err());
}

#[test]
fn builder_chain_three_failing_two_succeeding() {
    let file = write_props(SAMPLE);
    let mut builder = PropBuilder::load(file.path()).unwrap();

    let mut name = String::new();
    let mut port = 0_i32;
    let mut timeout = 30_i32;
    let mut missing_text = String::new();
    let mut regions: HashSet<Region> = HashSet::new();

    builder
        .set_string(&mut name, "service.name")
        .set_integer(&mut port, "service.port")
        .set_integer(&mut timeout, "service.timeout")
        .set_string(&mut missing_text, "service.owner")
        .set_enum_set(&mut regions, "service.regions.bad");

    // two succeeded
    assert_eq!(name, "dispatch");
    assert_eq!(port, 8080);
    // three failed without touching their destinations
    assert_eq!(timeout, 30);
    assert_eq!(missing_text, "");
    assert!(regions.is_empty());

    let errors: Vec<&String> = builder.errors().iter().collect();
    assert_eq!(errors.len(), 3);
    assert!(
        builder
            .errors()
            .contains("service.timeout : Is not a valid number")
    );
    assert!(
        builder
            .errors()
            .contains("service.owner : Does not exist in config file")
    );
    assert!(
        builder
            .errors()
            .contains("service.regions.bad : Contains an illegal enum value")
    );
}

#[test]
fn builder_round_trip_integer() {
    let store = PropStore::from_pairs([("answer", "42"), ("wrong", "notanumber")]);
    let mut builder = PropBuilder::new(store);

    let mut good = 0_i32;
    let mut bad = 17_i32;
    builder
        .set_integer(&mut good, "answer")
        .set_integer(&mut bad, "wrong");

    assert_eq!(good, 42);
    assert_eq!(bad, 17);
}

#[test]
fn builder_bool_default_records_nothing() {
    let file = write_props(SAMPLE);
    let mut builder = PropBuilder::load(file.path()).unwrap();

    let mut quiet = false;
    builder.set_bool_or(&mut quiet, "service.quiet", "Y", true);

    assert!(quiet);
    assert!(!builder.has_errors());
}

#[test]
fn independent_builders_do_not_share_errors() {
    let file = write_props(SAMPLE);

    let mut first = PropBuilder::load(file.path()).unwrap();
    let mut dest = String::new();
    first.set_string(&mut dest, "no.such.key");
    assert_eq!(first.errors().len(), 1);

    let second = PropBuilder::load(file.path()).unwrap();
    assert!(second.errors().is_empty());
}

#[test]
fn file_and_in_memory_stores_behave_identically() {
    let file = write_props("key=value\ncount=5\n");
    let from_file = PropReader::load(file.path()).unwrap();
    let from_pairs = PropReader::new(PropStore::from_pairs([("key", "value"), ("count", "5")]));

    assert_eq!(from_file.get_string("key"), from_pairs.get_string("key"));
    assert_eq!(from_file.get_int("count"), from_pairs.get_int("count"));
}

#[test]
fn load_failure_propagates() {
    assert!(PropReader::load("/no/such/dir/app.properties").is_err());
    assert!(PropBuilder::load("/no/such/dir/app.properties").is_err());
}
