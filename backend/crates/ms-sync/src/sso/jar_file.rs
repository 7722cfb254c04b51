use crate::{SyncError, SyncResult};

use ms_core::{JarCookie, cookie_jar};

use std::io::{BufReader, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

const JAR_HEADER: &str = "# Netscape HTTP Cookie File";

/// Request-scoped cookie-jar file, deleted on drop.
pub struct CookieJarFile {
    file: NamedTempFile,
}

impl CookieJarFile {
    pub fn create(dir: &Path) -> SyncResult<Self> {
        Builder::new()
            .prefix("ms-sso-")
            .suffix(".txt")
            .tempfile_in(dir)
            .map(|file| Self { file })
            .map_err(|e| {
                SyncError::local_resource(
                    format!("Cannot create temporary cookie file in {}", dir.display()),
                    e,
                )
            })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn write<I>(&mut self, cookies: I) -> SyncResult<()>
    where
        I: IntoIterator<Item = JarCookie>,
    {
        let path = self.file.path().to_path_buf();
        let write_err = |e: std::io::Error| {
            SyncError::local_resource(format!("Cannot write {}", path.display()), e)
        };

        let file = self.file.as_file_mut();
        writeln!(file, "{}", JAR_HEADER).map_err(write_err)?;
        for cookie in cookies {
            writeln!(file, "{}", cookie.to_line()).map_err(write_err)?;
        }
        file.flush().map_err(write_err)
    }

    pub fn read(&self) -> SyncResult<Vec<JarCookie>> {
        let read_err = |e: std::io::Error| {
            SyncError::local_resource(format!("Cannot read {}", self.file.path().display()), e)
        };

        let file = self.file.reopen().map_err(read_err)?;
        cookie_jar::read(BufReader::new(file)).map_err(read_err)
    }
}
