use std::str::FromStr;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::core::Error;
use super::message::Beacon;
use super::{FIELD_COUNT, FIELD_DELIMITER};

/// Codec for the delimited text record carried in each datagram
///
/// One datagram is one record; `decode` consumes the whole buffer. Records that
/// do not yield exactly four integer fields are rejected, and the receiver
/// drops them without acknowledgment.
#[derive(Clone, Default)]
pub struct BeaconCodec;

impl BeaconCodec {
    /// Creates a new beacon codec
    pub fn new() -> Self {
        BeaconCodec
    }
}

impl Encoder<Beacon> for BeaconCodec {
    type Error = Error;

    fn encode(&mut self, item: Beacon, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let record = format!(
            "{}{delim}{}{delim}{}{delim}{}",
            item.is_master as u8,
            item.light_value,
            item.join_order,
            item.reset as u8,
            delim = FIELD_DELIMITER,
        );
        dst.put(record.as_bytes());
        Ok(())
    }
}

impl Decoder for BeaconCodec {
    type Item = Beacon;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let raw = src.split_to(src.len());
        let text = std::str::from_utf8(&raw)
            .map_err(|e| Error::codec(format!("record is not UTF-8: {}", e)))?;

        let fields: Vec<&str> = text.trim().split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(Error::codec(format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        Ok(Some(Beacon {
            is_master: parse_field::<u8>(fields[0])? == 1,
            light_value: parse_field(fields[1])?,
            join_order: parse_field(fields[2])?,
            reset: parse_field::<u8>(fields[3])? == 1,
        }))
    }
}

fn parse_field<T: FromStr>(field: &str) -> Result<T, Error> {
    field
        .trim()
        .parse()
        .map_err(|_| Error::codec(format!("invalid field: {:?}", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Result<Option<Beacon>, Error> {
        BeaconCodec::new().decode(&mut BytesMut::from(text.as_bytes()))
    }

    #[test]
    fn test_encode_announcement() {
        let mut codec = BeaconCodec::new();
        let mut bytes = BytesMut::new();

        codec
            .encode(Beacon::announce(true, 2048, 3), &mut bytes)
            .unwrap();

        assert_eq!(&bytes[..], b"1,2048,3,0");
    }

    #[test]
    fn test_encode_reset() {
        let mut codec = BeaconCodec::new();
        let mut bytes = BytesMut::new();

        codec.encode(Beacon::reset(), &mut bytes).unwrap();

        assert_eq!(&bytes[..], b"0,0,255,1");
    }

    #[test]
    fn test_roundtrip() {
        let mut codec = BeaconCodec::new();
        let mut bytes = BytesMut::new();

        let beacon = Beacon::announce(false, 950, 7);
        codec.encode(beacon, &mut bytes).unwrap();

        let decoded = codec.decode(&mut bytes).unwrap().unwrap();
        assert_eq!(decoded, beacon);
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let beacon = decode("1,100,0,0\n").unwrap().unwrap();
        assert!(beacon.is_master);
        assert_eq!(beacon.light_value, 100);
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert!(decode("").unwrap().is_none());
    }

    #[test]
    fn test_decode_wrong_field_count() {
        assert!(decode("1,100,0").is_err());
        assert!(decode("1,100,0,0,9").is_err());
        assert!(decode("garbage").is_err());
    }

    #[test]
    fn test_decode_non_numeric_field() {
        assert!(decode("1,bright,0,0").is_err());
        assert!(decode("yes,100,0,0").is_err());
    }

    #[test]
    fn test_decode_nonzero_flag_is_not_master() {
        // Only the literal 1 marks a master
        let beacon = decode("2,100,0,0").unwrap().unwrap();
        assert!(!beacon.is_master);
    }
}
