use std::fs;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};


pub use data::{
    generate_layout, generate_random_data, LAYOUT_XML, SIMPLE_XML, SIMPLE_XML_PRETTY,
};

/// Path to the `tosconv` binary built by cargo for this test run.
const TOSCONV_BIN: &str = env!("CARGO_BIN_EXE_tosconv");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn empty() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::empty();
        fixture.write_file(name, contents);
        fixture
    }

    /// Create fixture holding `name` compressed into a `.tosc` envelope
    pub fn with_tosc(name: &str, xml: &[u8]) -> Self {
        Self::with_file(name, &tosc_core::compress(xml).unwrap())
    }

    /// Write (or replace) a file inside the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read_file(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Read a `.tosc` file from the fixture and decompress it
    pub fn read_tosc(&self, name: &str) -> Vec<u8> {
        tosc_core::decompress(&self.read_file(name)).unwrap()
    }

    /// Assert that files have expected contents
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be read or if its contents don't match the
    /// expected bytes.
    pub fn assert_files(&self, names: &[&str], contents: &[&[u8]]) {
        for (name, expected_contents) in names.iter().zip(contents) {
            let path = self.root_dir.path().join(name);
            let actual_contents = fs::read(path).unwrap_or_default();
            assert!(
                actual_contents == *expected_contents,
                "unexpected contents in {name}"
            );
        }
    }

    /// Run `tosconv` with the specified arguments from the fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or if awaiting its output fails.
    pub async fn run(&self, args: &[&str]) -> Output {
        let raw_output = tokio::process::Command::new(PathBuf::from(TOSCONV_BIN))
            .args(args)
            .current_dir(self.root_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
