// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing output.

use std::{fs::File, io, path::Path};

use crate::error::WriterError;

/// [`io::Write`] extension for easier manipulation with strings.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_all(string.as_ref().as_bytes())
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// Opens a writable file sink at `path`, creating or truncating it.
///
/// # Errors
///
/// [`WriterError::SinkOpen`] if the file cannot be created.
pub fn open_file(path: impl AsRef<Path>) -> Result<File, WriterError> {
    let path = path.as_ref();
    File::create(path).map_err(|source| WriterError::SinkOpen {
        path: path.to_path_buf(),
        source,
    })
}
