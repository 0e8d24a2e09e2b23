//! Take-once discipline for the process-wide session
//!
//! Kept in one test function: the guard is process-global and the test
//! harness runs functions in parallel.

use std::fs;

use monobus_core::{BusConfig, ErrorKind};
use monobus_linux::LinuxBus;

/// Descriptors currently open in this process
fn open_descriptors() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn test_single_bus_per_process() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("i2c-0"), b"").unwrap();
    let prefix = format!("{}/i2c-", dir.path().display());
    let config = BusConfig {
        device_prefix: prefix.clone(),
        ..BusConfig::default()
    };

    let mut bus = LinuxBus::take_with(prefix.as_str()).expect("first take succeeds");

    // Every way to a device node is refused while the first guard lives
    assert!(LinuxBus::take().is_none());
    assert!(LinuxBus::take_with(prefix.as_str()).is_none());
    assert!(LinuxBus::take_for(&config).is_none());

    // The guard is a full session
    assert_eq!(bus.connector().prefix(), prefix);
    let err = bus.open(7, 0x50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
    let err = bus.write(&[0x00]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);

    // A failed bind hands its descriptor back
    let before = open_descriptors();
    let err = bus.open(0, 0x50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
    assert_eq!(open_descriptors(), before);
    assert!(!bus.is_open());

    drop(bus);

    let bus = LinuxBus::take_for(&config).expect("take succeeds after drop");
    assert!(!bus.is_open());
    assert!(LinuxBus::take().is_none());
}
