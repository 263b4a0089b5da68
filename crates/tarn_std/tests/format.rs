use tarn_std::console::{self, FormatArg, Render};
use tarn_std::errors::{ErrorKind, FormatError};

fn fmt(template: &str, args: &[FormatArg]) -> String {
    console::format(template, args)
        .expect("template should format")
        .to_string_lossy()
}

#[test]
fn canonical_rendering() {
    assert_eq!(true.render(), "true");
    assert_eq!(false.render(), "false");
    assert_eq!((-42i64).render(), "-42");
    assert_eq!(1.5f64.render(), "1.5");
    assert_eq!(100.0f64.render(), "100");
    assert_eq!((0.1f64 + 0.2).render(), "0.3");
    assert_eq!(1e20f64.render(), "1e+20");
    assert_eq!(1.0e-5f64.render(), "1e-05");
    assert_eq!((-0.0f64).render(), "-0");
    assert_eq!(f64::NAN.render(), "nan");
    assert_eq!(f64::NEG_INFINITY.render(), "-inf");
    assert_eq!("plain".render(), "plain");
}

#[test]
fn integer_directives() {
    assert_eq!(fmt("%d apples", &[3.into()]), "3 apples");
    assert_eq!(fmt("%i", &[(-5i64).into()]), "-5");
    assert_eq!(
        fmt("%5d|%-5d|%05d", &[42.into(), 42.into(), 42.into()]),
        "   42|42   |00042"
    );
    assert_eq!(fmt("%+d % d", &[5.into(), 5.into()]), "+5  5");
    assert_eq!(fmt("%05d", &[(-42i64).into()]), "-0042");
    assert_eq!(fmt("%.3d", &[7.into()]), "007");
    assert_eq!(fmt("[%.0d]", &[0.into()]), "[]");
    assert_eq!(fmt("%u", &[(-1i64).into()]), "18446744073709551615");
    assert_eq!(fmt("%x", &[255.into()]), "ff");
    assert_eq!(fmt("%#X", &[255.into()]), "0XFF");
    assert_eq!(fmt("%#08x", &[255.into()]), "0x0000ff");
    assert_eq!(fmt("%x", &[(-1i64).into()]), "ffffffffffffffff");
    assert_eq!(fmt("%o %#o", &[8.into(), 8.into()]), "10 010");
    assert_eq!(fmt("%c%c", &[72.into(), 105.into()]), "Hi");
}

#[test]
fn float_directives() {
    assert_eq!(fmt("%f", &[3.14159.into()]), "3.141590");
    assert_eq!(fmt("%.2f", &[3.14159.into()]), "3.14");
    assert_eq!(fmt("%8.3f", &[(-1.5).into()]), "  -1.500");
    assert_eq!(fmt("%+.1f", &[2.0.into()]), "+2.0");
    assert_eq!(fmt("%08.2f", &[(-3.5).into()]), "-0003.50");
    assert_eq!(fmt("%e", &[12345.678.into()]), "1.234568e+04");
    assert_eq!(fmt("%E", &[0.00012.into()]), "1.200000E-04");
    assert_eq!(fmt("%g", &[0.0001.into()]), "0.0001");
    assert_eq!(fmt("%g", &[100000.0.into()]), "100000");
    assert_eq!(fmt("%g", &[1000000.0.into()]), "1e+06");
    assert_eq!(fmt("%.3g", &[3.14159.into()]), "3.14");
    assert_eq!(fmt("%#g", &[3.0.into()]), "3.00000");
    assert_eq!(fmt("%f", &[f64::NAN.into()]), "nan");
    assert_eq!(fmt("%F", &[f64::INFINITY.into()]), "INF");
    assert_eq!(fmt("%5.1f", &[f64::NEG_INFINITY.into()]), " -inf");
    assert_eq!(fmt("%05f", &[f64::INFINITY.into()]), "  inf");
}

#[test]
fn bool_text_and_percent() {
    assert_eq!(fmt("%b/%b", &[true.into(), false.into()]), "true/false");
    assert_eq!(fmt("%s", &["hello".into()]), "hello");
    assert_eq!(fmt("%s %s %s", &[1.5.into(), true.into(), 7.into()]), "1.5 true 7");
    assert_eq!(fmt("%.2s", &["hello".into()]), "he");
    assert_eq!(fmt("%-6s|%6s", &["ab".into(), "cd".into()]), "ab    |    cd");
    assert_eq!(fmt("100%%", &[]), "100%");
    assert_eq!(fmt("no directives", &[]), "no directives");
}

#[test]
fn arity_mismatches_are_reported() {
    assert_eq!(
        console::format("%d %d", &[1.into()]),
        Err(FormatError::MissingArgument {
            index: 1,
            offset: 3,
            supplied: 1
        })
    );
    assert_eq!(
        console::format("%d", &[1.into(), 2.into()]),
        Err(FormatError::ExtraArguments {
            used: 1,
            supplied: 2
        })
    );
    assert_eq!(
        console::validate("plain", &["x".into()]),
        Err(FormatError::ExtraArguments {
            used: 0,
            supplied: 1
        })
    );
}

#[test]
fn kind_mismatches_are_reported() {
    assert_eq!(
        console::format("%d", &[1.5.into()]),
        Err(FormatError::KindMismatch {
            index: 0,
            conversion: 'd',
            expected: "int",
            actual: "float"
        })
    );
    let err = console::format("%s %f", &["x".into(), 1.into()]).unwrap_err();
    assert_eq!(
        err,
        FormatError::KindMismatch {
            index: 1,
            conversion: 'f',
            expected: "float",
            actual: "int"
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("expects float"), "{err}");
    assert!(console::format("%b", &[1.into()]).is_err());
}

#[test]
fn malformed_templates_are_reported() {
    assert_eq!(
        console::format("%q", &[1.into()]),
        Err(FormatError::UnknownDirective {
            offset: 0,
            directive: "%q".to_string()
        })
    );
    assert_eq!(
        console::format("50%", &[]),
        Err(FormatError::DanglingPercent { offset: 2 })
    );
    // Template errors win over argument errors.
    assert!(matches!(
        console::format("%d %q", &[]),
        Err(FormatError::UnknownDirective { offset: 3, .. })
    ));
    assert_eq!(console::validate("%d|%s", &[1.into(), "a".into()]), Ok(()));
}

#[test]
fn oversized_fields_are_rejected_before_rendering() {
    assert_eq!(
        console::validate("%99999999999999999999d", &[1.into()]),
        Err(FormatError::FieldTooWide {
            offset: 0,
            field: "width",
            value: "99999999999999999999".to_string(),
            max: console::MAX_FIELD,
        })
    );
    assert_eq!(
        console::format("n=%.99999999999999999999d", &[1.into()]),
        Err(FormatError::FieldTooWide {
            offset: 2,
            field: "precision",
            value: "99999999999999999999".to_string(),
            max: console::MAX_FIELD,
        })
    );
    let err = console::format("%4097s", &["x".into()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(fmt("%4096s", &["x".into()]).len(), 4096);
    assert_eq!(fmt("%.4096f", &[0.5.into()]).len(), 4098);
}

#[test]
fn narrow_ints_convert_to_int_arguments() {
    assert_eq!(FormatArg::from(7i32), FormatArg::Int(7));
    assert_eq!(fmt("%d", &[FormatArg::from(-3i32)]), "-3");
}
