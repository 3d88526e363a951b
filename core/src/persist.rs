//! Flat-file codec for the persisted index.
//!
//! The tf table is one `doc<TAB>token<TAB>value` record per line; the idf
//! table is one `token<TAB>value` record per line. No header, no escaping.
//! Values use the shortest float representation that parses back to the
//! same `f64`, and both writers iterate their tables in sorted order, so
//! rebuilding the same corpus reproduces the files byte for byte.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::index::{IdfIndex, TfIndex};
use crate::Error;

/// Write the tf table. Documents appear in id order, tokens sorted within
/// each document.
pub fn save_tf<P: AsRef<Path>>(path: P, tf: &TfIndex) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);
    for (doc_id, terms) in tf.iter() {
        for (token, value) in terms {
            writeln!(out, "{doc_id}\t{token}\t{value}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read a tf table back. Any line that does not split into exactly three
/// fields, or whose value does not parse, fails the whole load: a partially
/// read index must never be returned.
pub fn load_tf<P: AsRef<Path>>(path: P) -> Result<TfIndex, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut tf = TfIndex::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        let &[doc_id, token, value] = fields.as_slice() else {
            return Err(Error::MalformedRecord {
                path: path.to_path_buf(),
                line: idx + 1,
                expected: 3,
            });
        };
        let value: f64 = value.parse().map_err(|_| Error::InvalidWeight {
            path: path.to_path_buf(),
            line: idx + 1,
            value: value.to_string(),
        })?;
        tf.insert(doc_id.to_owned(), token.to_owned(), value);
    }
    Ok(tf)
}

/// Write the idf table in token order.
pub fn save_idf<P: AsRef<Path>>(path: P, idf: &IdfIndex) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);
    for (token, value) in idf.iter() {
        writeln!(out, "{token}\t{value}")?;
    }
    out.flush()?;
    Ok(())
}

/// Read an idf table back, with the same hard-failure policy as
/// [`load_tf`].
pub fn load_idf<P: AsRef<Path>>(path: P) -> Result<IdfIndex, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut idf = IdfIndex::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        let &[token, value] = fields.as_slice() else {
            return Err(Error::MalformedRecord {
                path: path.to_path_buf(),
                line: idx + 1,
                expected: 2,
            });
        };
        let value: f64 = value.parse().map_err(|_| Error::InvalidWeight {
            path: path.to_path_buf(),
            line: idx + 1,
            value: value.to_string(),
        })?;
        idf.insert(token.to_owned(), value);
    }
    Ok(idf)
}
