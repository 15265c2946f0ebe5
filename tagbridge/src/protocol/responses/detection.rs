// tagbridge/src/protocol/responses/detection.rs

use crate::card::DetectedCard;
use crate::constants::DEFAULT_TARGET_ID;
use crate::protocol::parser;
use crate::types::{Technology, Uid};
use crate::Result;

/// Decode an InListPassiveTarget (106 kbps Type A) response payload
/// Layout: NbTg(1) + Tg(1) + SENS_RES(2) + SEL_RES(1) + UID_LEN(1) + UID(n)
///
/// Returns Ok(None) when the reader reports zero targets.
pub fn decode_detection(data: &[u8]) -> Result<Option<DetectedCard>> {
    let nb_tg = parser::byte_at(data, 0)?;
    if nb_tg == 0 {
        return Ok(None);
    }

    let sens = parser::slice_at(data, 2, 2)?;
    let sak = parser::byte_at(data, 4)?;
    let uid_len = parser::byte_at(data, 5)? as usize;
    let uid = parser::slice_at(data, 6, uid_len)?;

    Ok(Some(DetectedCard {
        uid: Uid::from_bytes(uid.to_vec()),
        sens_res: [sens[0], sens[1]],
        sak,
        // One target per InListPassiveTarget call; the PN532 numbers it 1
        target_id: DEFAULT_TARGET_ID,
        technology: Technology::Iso14443A,
    }))
}

/// Card Parser boundary: any malformed payload is "no card".
pub fn parse_detection(data: &[u8]) -> Option<DetectedCard> {
    match decode_detection(data) {
        Ok(card) => card,
        Err(e) => {
            log::debug!("ignoring malformed detection payload: {}", e);
            None
        }
    }
}
