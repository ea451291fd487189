use crate::add_test;
use crate::common::{Fixture, SIMPLE_XML, SIMPLE_XML_PRETTY};

// Test -v and --version print the version and succeed without an input
add_test!(version_flag, async {
    let fixture = Fixture::empty();

    for flag in ["-v", "--version"] {
        let output = fixture.run(&[flag]).await;
        assert!(output.status.success());
        assert_eq!(
            output.stdout,
            format!("tosconv {}\n", env!("CARGO_PKG_VERSION"))
        );
    }
});

// Test --version wins over a missing input file
add_test!(version_ignores_input, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&["--version", "missing.tosc"]).await;
    assert!(output.status.success());
    assert!(!fixture.file_exists("missing.xml"));
});

// Test -h prints usage and succeeds
add_test!(help_flag, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&["-h"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("--pretty"));
});

// Test running without an input prints usage and fails
add_test!(missing_input_argument, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Usage"));
});

// Test more than one input is rejected without touching either file
add_test!(too_many_inputs, async {
    let fixture = Fixture::with_tosc("a.tosc", SIMPLE_XML.as_bytes());
    fixture.write_file("b.tosc", &tosc_core::compress(SIMPLE_XML.as_bytes()).unwrap());

    let output = fixture.run(&["a.tosc", "b.tosc"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("Usage"));
    assert!(!fixture.file_exists("a.xml"));
    assert!(!fixture.file_exists("b.xml"));
});

// Test unknown flags are rejected
add_test!(unknown_flag, async {
    let fixture = Fixture::with_tosc("layout.tosc", SIMPLE_XML.as_bytes());

    let output = fixture.run(&["--bogus", "layout.tosc"]).await;
    assert!(!output.status.success());
    assert!(!fixture.file_exists("layout.xml"));
});

// Test -o and --output select the output path
add_test!(explicit_output, async {
    let fixture = Fixture::with_tosc("layout.tosc", SIMPLE_XML.as_bytes());

    let output = fixture.run(&["-o", "short.xml", "layout.tosc"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "short.xml\n");

    let output = fixture.run(&["--output", "long.txt", "layout.tosc"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "long.txt\n");

    fixture.assert_files(
        &["short.xml", "long.txt"],
        &[SIMPLE_XML.as_bytes(), SIMPLE_XML.as_bytes()],
    );
    assert!(!fixture.file_exists("layout.xml"));
});

// Test -f and --force overwrite an existing output
add_test!(force_overwrite, async {
    let fixture = Fixture::with_tosc("layout.tosc", SIMPLE_XML.as_bytes());

    for flag in ["-f", "--force"] {
        fixture.write_file("layout.xml", b"stale");

        let output = fixture.run(&[flag, "layout.tosc"]).await;
        assert!(output.status.success(), "stderr: {}", output.stderr);
        fixture.assert_files(&["layout.xml"], &[SIMPLE_XML.as_bytes()]);
    }
});

// Test --pretty matches -p
add_test!(pretty_long_flag, async {
    let fixture = Fixture::with_tosc("layout.tosc", SIMPLE_XML.as_bytes());

    let output = fixture.run(&["--pretty", "layout.tosc"]).await;
    assert!(output.status.success());
    fixture.assert_files(&["layout.xml"], &[SIMPLE_XML_PRETTY.as_bytes()]);
});

// Test --pretty is a no-op when compressing
add_test!(pretty_ignored_when_compressing, async {
    let fixture = Fixture::with_file("layout.xml", SIMPLE_XML.as_bytes());

    let output = fixture.run(&["-p", "layout.xml"]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);
    assert_eq!(output.stdout, "layout.tosc\n");
    assert_eq!(fixture.read_tosc("layout.tosc"), SIMPLE_XML.as_bytes());
});

// Test --verbose reports statistics on stderr only
add_test!(verbose_statistics, async {
    let fixture = Fixture::with_tosc("layout.tosc", SIMPLE_XML.as_bytes());

    let output = fixture.run(&["--verbose", "-p", "layout.tosc"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "layout.xml\n");
    assert!(output.stderr.contains("Decompressed"));
    assert!(output.stderr.contains("Reformatted"));

    let output = fixture.run(&["--verbose", "-o", "copy.tosc", "layout.xml"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("Compressed"));
});
