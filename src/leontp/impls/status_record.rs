use std::io::Cursor;
use byteorder::{LittleEndian, ReadBytesExt};
use crate::leontp::enums::decode_error::DecodeError;
use crate::leontp::leontp::{ntp_to_datetime, STATUS_REPLY_MIN_SIZE};
use crate::leontp::structs::status_record::StatusRecord;

const OFFSET_REFERENCE_FRACTION: u64 = 16;
const OFFSET_UPTIME: u64 = 24;
const OFFSET_GPS_LOCK: u64 = 36;

impl StatusRecord {
    /// Decode a status reply. Bytes past the last consumed field are ignored.
    #[tracing::instrument(skip(bytes), fields(len = bytes.len()), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let too_short = || DecodeError::TooShort {
            expected: STATUS_REPLY_MIN_SIZE,
            actual: bytes.len(),
        };
        if bytes.len() < STATUS_REPLY_MIN_SIZE {
            return Err(too_short());
        }

        let mut cursor = Cursor::new(bytes);

        cursor.set_position(OFFSET_REFERENCE_FRACTION);
        let reference_timestamp_fraction = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;
        let reference_timestamp_seconds = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;

        cursor.set_position(OFFSET_UPTIME);
        let uptime_seconds = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;
        let ntp_request_count = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;

        // 32..36 is unused
        cursor.set_position(OFFSET_GPS_LOCK);
        let gps_lock_seconds = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;
        let status_flags = cursor.read_u8().map_err(|_| too_short())?;
        let satellite_count = cursor.read_u8().map_err(|_| too_short())?;
        let serial_number = cursor.read_u16::<LittleEndian>().map_err(|_| too_short())?;
        let firmware_version = cursor.read_u32::<LittleEndian>().map_err(|_| too_short())?;

        Ok(StatusRecord {
            reference_timestamp_fraction,
            reference_timestamp_seconds,
            uptime_seconds,
            ntp_request_count,
            gps_lock_seconds,
            firmware_version,
            status_flags,
            satellite_count,
            serial_number,
            observed_at: ntp_to_datetime(reference_timestamp_seconds, reference_timestamp_fraction),
        })
    }
}
