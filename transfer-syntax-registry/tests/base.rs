//! Registry tests, to ensure that transfer syntaxes are properly
//! resolved when linked together in a separate program.

use dicom_xfer_core::VR;
use dicom_xfer_registry::{
    find_by_keyword, find_by_uid, lookup, TransferSyntax, TransferSyntaxId, TransferSyntaxRegistry,
};

fn assert_known(registry: TransferSyntaxRegistry, mut uid: &'static str) {
    let ts = registry.get(uid);
    assert!(ts.is_some(), "{:?} should be known", uid);
    let ts = ts.unwrap();
    if uid.ends_with('\0') {
        uid = &uid[0..uid.len() - 1];
    }
    assert_eq!(ts.uid(), uid);
}

#[test]
fn contains_base_ts() {
    let registry = TransferSyntaxRegistry;

    // contains implicit VR little endian
    assert_known(registry, "1.2.840.10008.1.2");

    // should work the same for trailing null characters
    assert_known(registry, "1.2.840.10008.1.2\0");

    // contains explicit VR little endian
    assert_known(registry, "1.2.840.10008.1.2.1");

    // contains explicit VR big endian
    assert_known(registry, "1.2.840.10008.1.2.2");

    assert!(registry.get("1.2.840.10008.1.2.1.98").is_none());
    assert!(registry.get("").is_none());
    assert!(registry.get("\0").is_none());
}

#[test]
fn registry_lists_every_identity_once() {
    let registry = dicom_xfer_registry::get_registry();
    assert_eq!(registry.len(), 54);
    assert!(!registry.is_empty());
    let ids: Vec<TransferSyntaxId> = registry.iter().map(|ts| ts.id()).collect();
    assert_eq!(ids, TransferSyntaxId::ALL.to_vec());
    assert!(registry.iter().all(|ts| !ts.is_unknown()));
}

#[test]
fn uid_and_keyword_round_trip() {
    for id in TransferSyntaxId::ALL {
        let ts = TransferSyntax::new(id);
        assert_eq!(find_by_uid(ts.uid()), id);
        assert_eq!(find_by_keyword(ts.keyword()), id);
        assert_eq!(TransferSyntax::from_uid(ts.uid()), ts);
        assert_eq!(TransferSyntaxRegistry.by_keyword(ts.keyword()), Some(ts));
        assert_eq!(ts.keyword().parse::<TransferSyntaxId>().unwrap(), id);
    }
}

#[test]
fn lossy_and_lossless_are_exclusive() {
    for id in TransferSyntaxId::ALL
        .iter()
        .copied()
        .chain(std::iter::once(TransferSyntaxId::Unknown))
    {
        let ts = TransferSyntax::new(id);
        assert_ne!(ts.is_lossy(), ts.is_lossless(), "{:?}", id);
        assert_ne!(ts.is_encapsulated(), ts.is_not_encapsulated(), "{:?}", id);
        assert_ne!(ts.is_explicit_vr(), ts.is_implicit_vr(), "{:?}", id);
    }
}

#[test]
fn native_pixel_data_is_neither_fragmentable_nor_referenced() {
    for ts in TransferSyntaxRegistry
        .iter()
        .filter(|ts| ts.is_not_encapsulated())
    {
        assert!(!ts.is_fragmentable(), "{}", ts);
        assert!(!ts.is_referenced(), "{}", ts);
    }
}

#[test]
fn lossy_jpeg_family() {
    let with_process: Vec<TransferSyntaxId> = TransferSyntaxRegistry
        .iter()
        .filter(|ts| ts.jpeg_process_8bit() != 0)
        .map(|ts| ts.id())
        .collect();
    assert_eq!(with_process.len(), 13);
    for id in with_process {
        let ts = TransferSyntax::new(id);
        assert!(ts.is_lossy());
        assert!(ts.jpeg_process_12bit() >= ts.jpeg_process_8bit());
    }
}

#[test]
fn well_known_uids() {
    assert_eq!(
        find_by_uid("1.2.840.10008.1.2"),
        TransferSyntaxId::LittleEndianImplicit
    );
    assert_eq!(
        find_by_uid("1.2.840.10008.1.2.1"),
        TransferSyntaxId::LittleEndianExplicit
    );
    assert_eq!(find_by_uid("not-a-uid"), TransferSyntaxId::Unknown);
    assert_eq!(dicom_xfer_registry::default().uid(), "1.2.840.10008.1.2");
}

#[test]
fn unknown_lookup_is_a_sentinel() {
    let entry = lookup(TransferSyntaxId::Unknown);
    assert_eq!(entry.uid, "");
    assert_eq!(entry.keyword, "");
    assert_eq!(entry.name, "");
    assert_eq!(find_by_uid(entry.uid), TransferSyntaxId::Unknown);
    assert_eq!(find_by_keyword(entry.keyword), TransferSyntaxId::Unknown);
}

#[test]
fn header_sizes_by_encoding_mode() {
    let implicit = TransferSyntax::from_keyword("ImplicitVRLittleEndian");
    let explicit = TransferSyntax::from_keyword("ExplicitVRLittleEndian");
    for vr in VR::ALL {
        assert_eq!(implicit.tag_header_size(vr), 8);
    }
    assert_eq!(explicit.tag_header_size(VR::OB), 12);
    assert_eq!(explicit.tag_header_size(VR::SQ), 12);
    assert_eq!(explicit.tag_header_size(VR::UN), 12);
    assert_eq!(explicit.tag_header_size(VR::US), 8);
    assert_eq!(explicit.tag_header_size(VR::AE), 8);
}

#[test]
fn descriptors_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let id = TransferSyntaxId::ALL[i * 13];
                TransferSyntax::from_uid(TransferSyntax::new(id).uid())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let ts = handle.join().unwrap();
        assert_eq!(ts.id(), TransferSyntaxId::ALL[i * 13]);
    }
}
