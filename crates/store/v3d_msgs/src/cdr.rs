//! CDR payload codec for RMW samples.
//!
//! ROS2 middleware prefixes every CDR payload with a four-byte encapsulation
//! header: a representation identifier (two bytes) followed by two option
//! bytes. The identifier selects the byte order of the body.

use byteorder::{BigEndian, LittleEndian};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors from decoding a CDR-encapsulated payload.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("payload too short for CDR encapsulation header ({0} bytes)")]
    TooShort(usize),

    #[error("unsupported CDR representation identifier {0:#06x}")]
    UnsupportedRepresentation(u16),

    #[error("CDR deserialization failed: {0}")]
    Cdr(#[from] cdr_encoding::Error),
}

const CDR_BE: u16 = 0x0000;
const CDR_LE: u16 = 0x0001;

/// Decode a message of type `T` from an RMW sample payload.
///
/// Accepts plain CDR in either byte order; parameter-list representations
/// (PL_CDR) are not supported.
pub fn try_decode_message<T: DeserializeOwned>(payload: &[u8]) -> Result<T, DecodeError> {
    if payload.len() < 4 {
        return Err(DecodeError::TooShort(payload.len()));
    }

    let representation = u16::from_be_bytes([payload[0], payload[1]]);
    let body = &payload[4..];

    let (message, _consumed) = match representation {
        CDR_LE => cdr_encoding::from_bytes::<T, LittleEndian>(body)?,
        CDR_BE => cdr_encoding::from_bytes::<T, BigEndian>(body)?,
        other => return Err(DecodeError::UnsupportedRepresentation(other)),
    };

    Ok(message)
}

/// Encode a message as a little-endian CDR payload with encapsulation header.
///
/// Counterpart of [`try_decode_message`], used by tests and tooling that
/// publish samples.
pub fn encode_message<T: Serialize>(message: &T) -> Result<Vec<u8>, cdr_encoding::Error> {
    let body = cdr_encoding::to_vec::<T, LittleEndian>(message)?;
    let mut payload = Vec::with_capacity(body.len() + 4);
    payload.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
    payload.extend_from_slice(&body);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_msgs::PoseStamped;

    #[test]
    fn test_pose_stamped_roundtrip() {
        let mut msg = PoseStamped::default();
        msg.header.frame_id = "base_link".to_owned();
        msg.pose.position.x = 1.5;
        msg.pose.position.y = -2.0;
        msg.pose.position.z = 0.25;
        msg.pose.orientation.z = 1.0;
        msg.pose.orientation.w = 0.0;
        msg.ns = "robot".to_owned();
        msg.id = "7".to_owned();

        let payload = encode_message(&msg).expect("encode");
        let decoded = try_decode_message::<PoseStamped>(&payload).expect("decode");

        assert_eq!(decoded.header.frame_id, "base_link");
        assert_eq!(decoded.pose.position.x, 1.5);
        assert_eq!(decoded.pose.position.y, -2.0);
        assert_eq!(decoded.pose.orientation.z, 1.0);
        assert_eq!(decoded.ns, "robot");
        assert_eq!(decoded.id, "7");
    }

    #[test]
    fn test_rejects_truncated_payload() {
        assert!(matches!(
            try_decode_message::<PoseStamped>(&[0x00, 0x01]),
            Err(DecodeError::TooShort(2))
        ));
    }

    #[test]
    fn test_rejects_pl_cdr() {
        let payload = [0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            try_decode_message::<PoseStamped>(&payload),
            Err(DecodeError::UnsupportedRepresentation(0x0003))
        ));
    }
}
