use std::io;
use std::io::Write;
use byteorder::WriteBytesExt;
use crate::leontp::leontp::{PRIVATE_MODE, PROTOCOL_VERSION, REQUEST_CODE, REQUEST_SEQUENCE, REQUEST_SIZE};
use crate::leontp::structs::status_request::StatusRequest;

impl Default for StatusRequest {
    fn default() -> Self {
        Self {
            version: PROTOCOL_VERSION,
            mode: PRIVATE_MODE,
        }
    }
}

impl StatusRequest {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u8((self.version << 3) | (self.mode & 0x07))?;
        bytes.write_u8(0)?;
        bytes.write_u8(REQUEST_CODE)?;
        bytes.write_u8(REQUEST_SEQUENCE)?;
        bytes.write_all(&[0u8; REQUEST_SIZE - 4])?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, io::Error> {
        let mut bytes = Vec::with_capacity(REQUEST_SIZE);
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}
