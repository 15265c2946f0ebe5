// tagbridge/src/protocol/commands/exchange.rs

use crate::constants::{MIFARE_CMD_READ, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_PREFIX_HOST};

/// Encode InDataExchange (0x40)
/// Layout: D4 40 Tg data...
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + data.len());
    buf.push(PN532_CMD_PREFIX_HOST);
    buf.push(PN532_CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}

/// Encode a MIFARE Ultralight READ (0x30) wrapped in InDataExchange. The
/// tag answers with 16 bytes: pages `page..page + 4`.
pub fn encode_mifare_read(target: u8, page: u8) -> Vec<u8> {
    encode_in_data_exchange(target, &[MIFARE_CMD_READ, page])
}
