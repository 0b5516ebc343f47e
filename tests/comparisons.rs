//! Integration tests for key descriptor equality and hashing.
//!
//! Each table pairs two independently built values with the expected equality and hash
//! outcome, the way a signature pipeline sees them: built separately from two parses and
//! then compared.

use std::collections::HashSet;

use dsig_keyinfo::prelude::*;

const MODULUS: &str = "rCz8Sn3GGXmikH2MdTeGY1D711EORX/lVXpr+ecGgqfUWF8MPB07XkYuJ54DAuYT318+2XrzMjOtqkT94VkXmxv6dFGhG8YZ8vNMPd4tdj9c0lpvWQdqXtL1TlFRpD/P6UMEigfN0c9oWDg9U7Ilymgei0UXtf1gtcQbc5sSQU0S4vr9YJp2gLFIGK11Iqg4XSGdcI0QWLLkkC6cBukhVnd6BCYbLjTYy3fNs4DzNdemJlxGl8sLexFytBF6YApvSdus3nFXaMCtBGx16HzkK9ne3lobAwL2o79bP4imEGqg+ibvyNmbrwFGnQrBc1jTF9LyQX9q+louxVfHs6ZiVw==";

const CERT_1: &str = "MIIDBTCCAe2gAwIBAgIQY4RNIR0dX6dBZggnkhCRoDANBgkqhkiG9w0BAQsFADAtMSswKQYDVQQDEyJhY2NvdW50cy5hY2Nlc3Njb250cm9sLndpbmRvd3MubmV0";
const CERT_2: &str = "MIIDKDCCAhCgAwIBAgIQBHJvVNxP1oZO4HYKh+rypDANBgkqhkiG9w0BAQsFADAjMSEwHwYDVQQDExhsb2dpbi5taWNyb3NvZnRvbmxpbmUudXM=";
const CERT_3: &str = "MIIC4jCCAcqgAwIBAgIQQNXrmzhLN4VGlUXDYCRT3zANBgkqhkiG9w0BAQsFADAtMSswKQYDVQQDEyJhY2NvdW50cy5hY2Nlc3Njb250cm9sLndpbmRvd3MubmV0";

struct Case<T> {
    id: &'static str,
    first: T,
    second: T,
    equal: bool,
    hash_matches: bool,
}

fn check<T: PartialEq + HashCode>(cases: Vec<Case<T>>) {
    for case in cases {
        assert_eq!(
            case.first == case.second,
            case.equal,
            "{}: unexpected equality result",
            case.id
        );
        assert_eq!(
            case.first.hash_code() == case.second.hash_code(),
            case.hash_matches,
            "{}: unexpected hash comparison",
            case.id
        );
    }
}

fn cert(encoded: &str) -> Vec<u8> {
    let descriptor = X509KeyDescriptor::from_base64_certificates([encoded]).unwrap();
    descriptor.certificates()[0].clone()
}

#[test]
fn rsa_key_value_comparisons() {
    let rsa = |modulus: &str, exponent: &str| RsaKeyValue::new(modulus, exponent);
    check(vec![
        Case {
            id: "Matching_empty",
            first: rsa("", ""),
            second: rsa("", ""),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Matching_ModulusAndExponent",
            first: rsa(MODULUS, "AQAB"),
            second: rsa(MODULUS, "AQAB"),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "NotMatching_EmptyModulus",
            first: rsa("", "AQAB"),
            second: rsa(MODULUS, "AQAB"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "NotMatching_EmptyExponent",
            first: rsa(MODULUS, ""),
            second: rsa(MODULUS, "AQAB"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "NotMatching_DifferentExponent",
            first: rsa(MODULUS, "differentExponent"),
            second: rsa(MODULUS, "AQAB"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "NotMatching_DifferentModulus",
            first: rsa("differentModulus", "AQAB"),
            second: rsa(MODULUS, "AQAB"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "NotMatching_DifferentModulusAndExponent",
            first: rsa("differentModulus", "differentExponent"),
            second: rsa(MODULUS, "AQAB"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "ModulusAndExponentAreCaseInsensitive",
            first: rsa("modulus", "exponent"),
            second: rsa("MODULUS", "EXPONENT"),
            equal: true,
            hash_matches: true,
        },
    ]);
}

#[test]
fn issuer_serial_comparisons() {
    check(vec![
        Case {
            id: "Matching",
            first: IssuerSerial::new("IssuerName", "SerialNumber"),
            second: IssuerSerial::new("IssuerName", "SerialNumber"),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_Issuer",
            first: IssuerSerial::new("IssuerName", "SerialNumber"),
            second: IssuerSerial::new("AnotherIssuerName", "SerialNumber"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "Nonmatching_Serial",
            first: IssuerSerial::new("IssuerName", "SerialNumber"),
            second: IssuerSerial::new("IssuerName", "AnotherSerialNumber"),
            equal: false,
            hash_matches: false,
        },
    ]);
}

#[test]
fn x509_descriptor_comparisons() {
    let (cert1, cert2, cert3) = (cert(CERT_1), cert(CERT_2), cert(CERT_3));
    let with_ski = |ski: &str| X509KeyDescriptor::builder().ski(ski).build();
    let with_crl = |crl: &str| X509KeyDescriptor::builder().crl(crl).build();
    let with_issuer_serial = |issuer: &str, serial: &str| {
        X509KeyDescriptor::builder()
            .issuer_serial(IssuerSerial::new(issuer, serial))
            .build()
    };

    check(vec![
        Case {
            id: "Matching_empty",
            first: X509KeyDescriptor::new(),
            second: X509KeyDescriptor::new(),
            equal: true,
            // Empty descriptors hash a per-construction salt
            hash_matches: false,
        },
        Case {
            id: "Matching_Certificates",
            first: X509KeyDescriptor::from_certificate(cert1.clone()),
            second: X509KeyDescriptor::from_certificate(cert1.clone()),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_Certificates",
            first: X509KeyDescriptor::from_certificate(cert1.clone()),
            second: X509KeyDescriptor::from_certificate(cert2.clone()),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "Matching_MultipleCertificates",
            first: X509KeyDescriptor::from_certificates([cert1.clone(), cert2.clone()]),
            second: X509KeyDescriptor::from_certificates([cert1.clone(), cert2.clone()]),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_MultipleCertificates",
            first: X509KeyDescriptor::from_certificates([cert1.clone(), cert2.clone()]),
            second: X509KeyDescriptor::from_certificates([cert1.clone(), cert3.clone()]),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "Matching_SKI",
            first: with_ski("SKISampleString"),
            second: with_ski("SKISampleString"),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_SKI",
            first: with_ski("SKISampleString"),
            second: with_ski("AnotherSKISampleString"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "Matching_CRL",
            first: with_crl("CRLSampleString"),
            second: with_crl("CRLSampleString"),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_CRL",
            first: with_crl("CRLSampleString"),
            second: with_crl("AnotherCRLSampleString"),
            equal: false,
            hash_matches: false,
        },
        Case {
            id: "Matching_IssuerSerial",
            first: with_issuer_serial("IssuerName", "SerialNumber"),
            second: with_issuer_serial("IssuerName", "SerialNumber"),
            equal: true,
            hash_matches: true,
        },
        Case {
            id: "Nonmatching_IssuerSerial",
            first: with_issuer_serial("IssuerName", "SerialNumber"),
            second: with_issuer_serial("AnotherIssuerName", "AnotherSerialNumber"),
            equal: false,
            hash_matches: false,
        },
    ]);
}

#[test]
fn std_hash_set_keeps_every_empty_descriptor() {
    // A plain HashSet cannot dedupe empty descriptors: equal values, different buckets.
    let mut set = HashSet::new();
    set.insert(X509KeyDescriptor::from_certificate(cert(CERT_1)));
    set.insert(X509KeyDescriptor::from_certificate(cert(CERT_1)));
    assert_eq!(set.len(), 1);

    let mut empties = HashSet::new();
    for _ in 0..16 {
        empties.insert(X509KeyDescriptor::new());
    }
    assert!(empties.len() > 1);
}

#[test]
fn key_material_set_dedups_empty_descriptors() {
    let set = KeyMaterialSet::new();
    for _ in 0..16 {
        set.insert_x509(X509KeyDescriptor::new());
    }
    assert_eq!(set.len(), 1);
    assert!(set.contains_x509(&X509KeyDescriptor::new()));
}

#[test]
fn key_info_matches_trust_store() {
    let trusted_cert = cert(CERT_2);
    let declared = KeyInfo::builder()
        .key_name("signing-key")
        .rsa_key_value(RsaKeyValue::new(MODULUS.to_ascii_lowercase(), "aqab"))
        .x509_data(X509KeyDescriptor::new())
        .x509_data(
            X509KeyDescriptor::builder()
                .certificate(trusted_cert.clone())
                .issuer_serial(IssuerSerial::new("CN=login.microsoftonline.us", "4272"))
                .build(),
        )
        .build();

    assert!(declared.matches_rsa_key(&RsaKeyValue::new(MODULUS.to_ascii_lowercase(), "AQAB")));
    assert!(declared.references_certificate(&trusted_cert));
    assert!(declared
        .find_by_issuer_serial(&IssuerSerial::new("CN=login.microsoftonline.us", "4272"))
        .is_some());

    let trust_store = KeyMaterialSet::with_config(KeySetConfig::minimal()).unwrap();
    assert_eq!(trust_store.insert_key_info(&declared), 3);
    assert_eq!(trust_store.insert_key_info(&declared.clone()), 0);
    assert!(trust_store
        .find_by_issuer_serial(&IssuerSerial::new("CN=login.microsoftonline.us", "4272"))
        .is_some_and(|found| found.contains_certificate(&trusted_cert)));
}

#[test]
fn values_equal_themselves() {
    let rsa = RsaKeyValue::new(MODULUS, "AQAB");
    let issuer_serial = IssuerSerial::new("IssuerName", "SerialNumber");
    let x509 = X509KeyDescriptor::builder()
        .certificate(cert(CERT_3))
        .ski("SKISampleString")
        .issuer_serial(issuer_serial.clone())
        .build();
    let empty = X509KeyDescriptor::new();

    assert!(rsa == rsa.clone());
    assert!(issuer_serial == issuer_serial.clone());
    assert!(x509 == x509.clone());
    assert!(empty == empty.clone());
}
