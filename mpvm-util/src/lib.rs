/// Byte order used by every on-disk and on-wire format in this workspace.
pub type Endian = byteorder::LittleEndian;
