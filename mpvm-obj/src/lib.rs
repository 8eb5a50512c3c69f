//! The on-disk object-file format shared by the assembler and the supervisor:
//! a 4-byte little-endian length header followed by that many body bytes.
//! The body is an opaque opcode stream as far as this crate is concerned;
//! it is the supervisor's loader that gives it meaning.

use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

use mpvm_util::Endian;

/// Upper bound on a single image's body length, matching the VM's
/// per-process memory-growth ceiling at load time.
pub const MEMLIM: u32 = 0x000F_F000;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("object body of {len} bytes exceeds MEMLIM ({limit} bytes)")]
    BodyTooLarge { len: u32, limit: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The body of a loadable image: the opcode stream described in §4.D/E.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    body: Vec<u8>,
}

impl Image {
    pub fn new(body: Vec<u8>) -> Image {
        Image { body }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

pub fn read<R: Read>(reader: &mut R) -> Result<Image, ObjError> {
    let len = reader.read_u32::<Endian>()?;
    if len > MEMLIM {
        return Err(ObjError::BodyTooLarge {
            len,
            limit: MEMLIM,
        });
    }
    let mut body = vec![0; len as usize];
    reader.read_exact(&mut body)?;
    Ok(Image::new(body))
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> Result<(), ObjError> {
    let len = image.body.len() as u32;
    if len > MEMLIM {
        return Err(ObjError::BodyTooLarge {
            len,
            limit: MEMLIM,
        });
    }
    writer.write_u32::<Endian>(len)?;
    writer.write_all(&image.body)?;
    Ok(())
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> Result<Image, ObjError> {
        read(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, image: &Image) -> Result<(), ObjError> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Image, ObjError> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), ObjError> {
    BufWriter::new(File::create(path)?).write_image(image)
}
