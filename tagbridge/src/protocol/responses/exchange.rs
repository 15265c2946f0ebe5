// tagbridge/src/protocol/responses/exchange.rs

use crate::constants::IN_DATA_EXCHANGE_STATUS_OK;
use crate::protocol::parser;
use crate::Result;

/// Decode an InDataExchange response payload
/// Layout: Status(1) + DataIn(n)
///
/// A non-zero status (timeout, CRC error, NAK from the tag...) is reported
/// as UnexpectedResponse carrying the status byte.
pub fn decode_data_exchange(data: &[u8]) -> Result<&[u8]> {
    parser::expect_byte(data, 0, IN_DATA_EXCHANGE_STATUS_OK)?;
    Ok(&data[1..])
}
